#![allow(dead_code)]
use ferrous_mdns_domain::{
    AddressRecord, Labels, PointerRecord, RecordHeader, RecordType, Response, ServiceRecord,
    TextRecord,
};
use std::net::IpAddr;
use std::str::FromStr;

pub const INSTANCE: &str = "Living Room._googlecast._tcp.local";
pub const SERVICE_TYPE: &str = "_googlecast._tcp.local";
pub const HOST: &str = "living-room.local";

/// Builds a [`Response`] with a chosen subset of its records filled in.
pub struct ResponseBuilder {
    instance: Labels,
    now_millis: i64,
    pointer: bool,
    service: bool,
    text: bool,
    inet4: Option<&'static str>,
    inet6: Option<&'static str>,
    ttl: u32,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            instance: Labels::from_dotted(INSTANCE),
            now_millis: 1_000,
            pointer: false,
            service: false,
            text: false,
            inet4: None,
            inet6: None,
            ttl: 120,
        }
    }

    /// Pointer, service, text and IPv4 address all present.
    pub fn complete() -> Self {
        Self::new()
            .with_pointer()
            .with_service()
            .with_text()
            .with_inet4("192.168.1.50")
    }

    pub fn with_pointer(mut self) -> Self {
        self.pointer = true;
        self
    }

    pub fn with_service(mut self) -> Self {
        self.service = true;
        self
    }

    pub fn with_text(mut self) -> Self {
        self.text = true;
        self
    }

    pub fn with_inet4(mut self, address: &'static str) -> Self {
        self.inet4 = Some(address);
        self
    }

    pub fn with_inet6(mut self, address: &'static str) -> Self {
        self.inet6 = Some(address);
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> Response {
        let mut response = Response::new(self.instance.clone(), self.now_millis);
        if self.pointer {
            response.add_pointer_record(pointer(SERVICE_TYPE, INSTANCE, self.ttl));
        }
        if self.service {
            response.set_service_record(Some(service(INSTANCE, HOST, 8009)));
        }
        if self.text {
            response.set_text_record(Some(text(INSTANCE, &["fn=Living Room", "md=Chromecast"])));
        }
        if let Some(address) = self.inet4 {
            response.set_inet4_address_record(Some(address_record(HOST, address)));
        }
        if let Some(address) = self.inet6 {
            response.set_inet6_address_record(Some(address_record(HOST, address)));
        }
        response
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn header(name: &str, record_type: RecordType, ttl: u32) -> RecordHeader {
    RecordHeader::new(Labels::from_dotted(name), record_type, ttl)
}

pub fn pointer(owner: &str, target: &str, ttl: u32) -> PointerRecord {
    PointerRecord::new(
        header(owner, RecordType::PTR, ttl),
        Labels::from_dotted(target),
    )
}

pub fn service(owner: &str, host: &str, port: u16) -> ServiceRecord {
    ServiceRecord::new(
        header(owner, RecordType::SRV, 120),
        0,
        0,
        port,
        Labels::from_dotted(host),
    )
}

pub fn text(owner: &str, entries: &[&str]) -> TextRecord {
    TextRecord::from_strings(header(owner, RecordType::TXT, 4500), entries)
}

pub fn address_record(owner: &str, address: &str) -> AddressRecord {
    let address = IpAddr::from_str(address).unwrap();
    let record_type = if address.is_ipv4() {
        RecordType::A
    } else {
        RecordType::AAAA
    };
    AddressRecord::new(header(owner, record_type, 120), address)
}
