pub mod labels;
pub mod record;
pub mod record_type;

pub use labels::{Labels, SUBTYPE_LABEL};
pub use record::{
    AddressRecord, MdnsRecord, PointerRecord, RecordHeader, ServiceProtocol, ServiceRecord,
    TextRecord, CACHE_FLUSH_BIT, CLASS_IN,
};
pub use record_type::RecordType;
