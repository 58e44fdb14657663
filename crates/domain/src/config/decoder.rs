use crate::dns_record::Labels;
use serde::{Deserialize, Serialize};

/// Largest datagram the packet writer will build unless configured otherwise.
pub const DEFAULT_MAX_PACKET_SIZE: usize = 4096;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DecoderConfig {
    /// Service type to keep, e.g. `_googlecast._tcp.local`. `None` accepts
    /// every service type found in a datagram.
    #[serde(default)]
    pub service_type: Option<String>,

    #[serde(default = "default_max_packet_size")]
    pub max_packet_size: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            service_type: None,
            max_packet_size: default_max_packet_size(),
        }
    }
}

impl DecoderConfig {
    pub fn service_type_labels(&self) -> Option<Labels> {
        self.service_type.as_deref().map(Labels::from_dotted)
    }
}

fn default_max_packet_size() -> usize {
    DEFAULT_MAX_PACKET_SIZE
}
