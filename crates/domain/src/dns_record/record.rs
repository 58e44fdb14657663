use super::labels::{Labels, SUBTYPE_LABEL};
use super::RecordType;
use compact_str::CompactString;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub const CLASS_IN: u16 = 1;

/// Top bit of the class field; in mDNS answers it marks the record set as
/// unique so receivers flush older cached copies (RFC 6762 §10.2).
pub const CACHE_FLUSH_BIT: u16 = 0x8000;

/// Fields shared by every resource record variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHeader {
    pub name: Labels,
    pub record_type: RecordType,
    /// Class with the cache-flush bit removed.
    pub class: u16,
    pub cache_flush: bool,
    pub ttl: u32,
    /// Stamped from the decoder's clock, in milliseconds.
    pub receipt_time_millis: i64,
}

impl RecordHeader {
    pub fn new(name: Labels, record_type: RecordType, ttl: u32) -> Self {
        Self {
            name,
            record_type,
            class: CLASS_IN,
            cache_flush: false,
            ttl,
            receipt_time_millis: 0,
        }
    }

    /// Splits a raw wire class into the stored class and the cache-flush flag.
    pub fn with_wire_class(mut self, wire_class: u16) -> Self {
        self.class = wire_class & !CACHE_FLUSH_BIT;
        self.cache_flush = wire_class & CACHE_FLUSH_BIT != 0;
        self
    }

    pub fn with_cache_flush(mut self, cache_flush: bool) -> Self {
        self.cache_flush = cache_flush;
        self
    }

    pub fn with_receipt_time(mut self, receipt_time_millis: i64) -> Self {
        self.receipt_time_millis = receipt_time_millis;
        self
    }

    pub fn wire_class(&self) -> u16 {
        if self.cache_flush {
            self.class | CACHE_FLUSH_BIT
        } else {
            self.class
        }
    }

    pub fn ttl_millis(&self) -> i64 {
        i64::from(self.ttl) * 1000
    }

    pub fn expiry_millis(&self) -> i64 {
        self.receipt_time_millis.saturating_add(self.ttl_millis())
    }

    pub fn remaining_ttl_millis(&self, now_millis: i64) -> i64 {
        self.expiry_millis().saturating_sub(now_millis).max(0)
    }

    pub fn is_expired(&self, now_millis: i64) -> bool {
        now_millis >= self.expiry_millis()
    }

    /// A TTL of zero announces that the record is going away.
    pub fn is_goodbye(&self) -> bool {
        self.ttl == 0
    }
}

/// A or AAAA record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub header: RecordHeader,
    address: IpAddr,
}

impl AddressRecord {
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are stored as IPv4, which
    /// is how dual-stack responders expect them to be read back.
    pub fn new(header: RecordHeader, address: IpAddr) -> Self {
        let address = match address {
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(v4) => IpAddr::V4(v4),
                None => IpAddr::V6(v6),
            },
            v4 => v4,
        };
        Self { header, address }
    }

    pub fn address(&self) -> IpAddr {
        self.address
    }

    pub fn inet4_address(&self) -> Option<Ipv4Addr> {
        match self.address {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        }
    }

    pub fn inet6_address(&self) -> Option<Ipv6Addr> {
        match self.address {
            IpAddr::V6(v6) => Some(v6),
            IpAddr::V4(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerRecord {
    pub header: RecordHeader,
    pointer: Labels,
    subtype: Option<CompactString>,
}

impl PointerRecord {
    pub fn new(header: RecordHeader, pointer: Labels) -> Self {
        let name = &header.name;
        let subtype = match name.get(1) {
            Some(second) if name.len() > 2 && second.eq_ignore_ascii_case(SUBTYPE_LABEL) => {
                name.first().map(CompactString::new)
            }
            _ => None,
        };
        Self {
            header,
            pointer,
            subtype,
        }
    }

    pub fn pointer(&self) -> &Labels {
        &self.pointer
    }

    pub fn subtype(&self) -> Option<&str> {
        self.subtype.as_deref()
    }

    pub fn has_subtype(&self) -> bool {
        self.subtype.is_some()
    }

    /// Owner name without the `<subtype>._sub` prefix.
    pub fn service_type(&self) -> Labels {
        if self.has_subtype() {
            self.header.name.skip(2)
        } else {
            self.header.name.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceProtocol {
    Tcp,
    Udp,
}

impl ServiceProtocol {
    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("_tcp") {
            Some(ServiceProtocol::Tcp)
        } else if label.eq_ignore_ascii_case("_udp") {
            Some(ServiceProtocol::Udp)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub header: RecordHeader,
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub host: Labels,
}

impl ServiceRecord {
    pub fn new(header: RecordHeader, priority: u16, weight: u16, port: u16, host: Labels) -> Self {
        Self {
            header,
            priority,
            weight,
            port,
            host,
        }
    }

    // Owner names look like `<instance>.<service>.<proto>.<domain>`.
    fn owner_label(&self, index: usize) -> Option<&str> {
        if self.header.name.len() == 4 {
            self.header.name.get(index)
        } else {
            None
        }
    }

    pub fn service_instance_name(&self) -> Option<&str> {
        self.owner_label(0)
    }

    pub fn service_name(&self) -> Option<&str> {
        self.owner_label(1)
    }

    pub fn service_protocol(&self) -> Option<ServiceProtocol> {
        self.owner_label(2).and_then(ServiceProtocol::from_label)
    }
}

/// TXT record. Entries are kept as raw bytes in wire order; `key=value`
/// parsing is left to callers because duplicate and malformed keys are legal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    pub header: RecordHeader,
    entries: Vec<Vec<u8>>,
}

impl TextRecord {
    pub fn new(header: RecordHeader, entries: Vec<Vec<u8>>) -> Self {
        Self { header, entries }
    }

    pub fn from_strings<I, S>(header: RecordHeader, strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = strings
            .into_iter()
            .map(|s| s.as_ref().as_bytes().to_vec())
            .collect();
        Self { header, entries }
    }

    pub fn entries(&self) -> &[Vec<u8>] {
        &self.entries
    }

    pub fn strings(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| String::from_utf8_lossy(entry).into_owned())
            .collect()
    }

    /// Value of the first `key=value` entry whose key matches
    /// case-insensitively. A bare `key` entry yields an empty value.
    pub fn value(&self, key: &str) -> Option<&[u8]> {
        self.entries.iter().find_map(|entry| {
            let (entry_key, value) = match entry.iter().position(|&b| b == b'=') {
                Some(eq) => (&entry[..eq], &entry[eq + 1..]),
                None => (&entry[..], &entry[entry.len()..]),
            };
            entry_key
                .eq_ignore_ascii_case(key.as_bytes())
                .then_some(value)
        })
    }
}

/// Closed set of record variants the decoder produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MdnsRecord {
    Address(AddressRecord),
    Pointer(PointerRecord),
    Service(ServiceRecord),
    Text(TextRecord),
}

impl MdnsRecord {
    pub fn header(&self) -> &RecordHeader {
        match self {
            MdnsRecord::Address(r) => &r.header,
            MdnsRecord::Pointer(r) => &r.header,
            MdnsRecord::Service(r) => &r.header,
            MdnsRecord::Text(r) => &r.header,
        }
    }

    pub fn name(&self) -> &Labels {
        &self.header().name
    }

    pub fn record_type(&self) -> RecordType {
        self.header().record_type
    }

    pub fn ttl(&self) -> u32 {
        self.header().ttl
    }

    pub fn receipt_time_millis(&self) -> i64 {
        self.header().receipt_time_millis
    }
}

impl From<AddressRecord> for MdnsRecord {
    fn from(record: AddressRecord) -> Self {
        MdnsRecord::Address(record)
    }
}

impl From<PointerRecord> for MdnsRecord {
    fn from(record: PointerRecord) -> Self {
        MdnsRecord::Pointer(record)
    }
}

impl From<ServiceRecord> for MdnsRecord {
    fn from(record: ServiceRecord) -> Self {
        MdnsRecord::Service(record)
    }
}

impl From<TextRecord> for MdnsRecord {
    fn from(record: TextRecord) -> Self {
        MdnsRecord::Text(record)
    }
}
