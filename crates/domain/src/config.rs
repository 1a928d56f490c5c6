pub mod errors;
pub mod geoip;
pub mod logging;
pub mod root;
pub mod select;

pub use errors::ConfigError;
pub use geoip::{GeoNetworkConfig, GeoipConfig};
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use select::SelectConfig;
