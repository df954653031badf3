pub mod api;
pub mod routing;
pub mod services;
