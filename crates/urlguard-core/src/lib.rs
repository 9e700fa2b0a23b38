pub mod config;
pub mod logging;
pub mod outbound_url;
