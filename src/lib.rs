pub mod harness;
pub mod utils;

pub use harness::config::HarnessConfig;
pub use harness::Harness;
pub use harness::HarnessError;
pub use utils::log;
