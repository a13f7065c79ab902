pub mod logger;
pub mod validation_log;

pub use logger::init;
pub use validation_log::ValidationLog;
