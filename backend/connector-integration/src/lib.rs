pub mod configs;
pub mod connectors;
pub mod exception_handler;
pub mod logger;
pub mod payment_builder;
pub mod utils;
pub mod validation;
