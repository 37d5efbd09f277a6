pub mod config;
pub mod converter;
pub mod logging;

pub use converter::convert;
