pub mod decoder;
pub mod errors;
pub mod logging;
pub mod root;

pub use decoder::{DecoderConfig, DEFAULT_MAX_PACKET_SIZE};
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
