#![allow(dead_code)]
use ferrous_mdns_domain::{
    AddressRecord, Labels, MdnsRecord, PointerRecord, RecordHeader, RecordType, ServiceRecord,
    TextRecord,
};
use std::net::IpAddr;

pub const DEFAULT_TTL: u32 = 120;

pub fn labels(name: &str) -> Labels {
    Labels::from_dotted(name)
}

pub fn pointer(owner: &str, target: &str) -> MdnsRecord {
    PointerRecord::new(
        RecordHeader::new(labels(owner), RecordType::PTR, DEFAULT_TTL),
        labels(target),
    )
    .into()
}

pub fn pointer_with_ttl(owner: &str, target: &str, ttl: u32) -> MdnsRecord {
    PointerRecord::new(
        RecordHeader::new(labels(owner), RecordType::PTR, ttl),
        labels(target),
    )
    .into()
}

pub fn service(owner: &str, host: &str, port: u16) -> MdnsRecord {
    ServiceRecord::new(
        RecordHeader::new(labels(owner), RecordType::SRV, DEFAULT_TTL).with_cache_flush(true),
        0,
        0,
        port,
        labels(host),
    )
    .into()
}

pub fn text(owner: &str, strings: &[&str]) -> MdnsRecord {
    TextRecord::from_strings(
        RecordHeader::new(labels(owner), RecordType::TXT, DEFAULT_TTL).with_cache_flush(true),
        strings,
    )
    .into()
}

pub fn address(owner: &str, address: &str) -> MdnsRecord {
    let address: IpAddr = address.parse().expect("valid IP address");
    let record_type = match address {
        IpAddr::V4(_) => RecordType::A,
        IpAddr::V6(_) => RecordType::AAAA,
    };
    AddressRecord::new(
        RecordHeader::new(labels(owner), record_type, DEFAULT_TTL).with_cache_flush(true),
        address,
    )
    .into()
}
