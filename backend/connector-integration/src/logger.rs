pub mod config;

pub mod setup;
pub use setup::setup;

mod service;
pub use service::TracingLoggerService;

pub use tracing::{debug, error, event as log, info, warn};
