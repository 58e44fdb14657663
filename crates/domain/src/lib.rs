//! Ferrous mDNS Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod response;

pub use config::{CliOverrides, Config, ConfigError, DecoderConfig, LogFormat, LoggingConfig};
pub use dns_record::{
    AddressRecord, Labels, MdnsRecord, PointerRecord, RecordHeader, RecordType, ServiceProtocol,
    ServiceRecord, TextRecord,
};
pub use errors::DomainError;
pub use response::Response;
