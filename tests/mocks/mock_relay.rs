use async_trait::async_trait;
use contact_relay::error::{RelayError, RelayResult};
use contact_relay::Relay;
use std::sync::{Arc, Mutex};

/// How the mock answers a send.
#[allow(dead_code)]
#[derive(Clone, Debug)]
pub enum MockBehavior {
    Deliver,
    Reject(String),
    Timeout,
    Panic,
}

/// Mock relay for testing.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockRelay {
    behavior: Arc<Mutex<MockBehavior>>,
    sent: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockRelay {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockRelay {
    fn default() -> Self {
        Self::new(MockBehavior::Deliver)
    }
}

#[async_trait]
impl Relay for MockRelay {
    async fn send(&self, text: &str) -> RelayResult<()> {
        self.sent.lock().unwrap().push(text.to_string());

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            MockBehavior::Deliver => Ok(()),
            MockBehavior::Reject(description) => Err(RelayError::Rejected(description)),
            MockBehavior::Timeout => Err(RelayError::Timeout),
            MockBehavior::Panic => panic!("relay exploded"),
        }
    }
}
