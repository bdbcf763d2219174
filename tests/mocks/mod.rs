pub mod mock_relay;

pub use mock_relay::{MockBehavior, MockRelay};
