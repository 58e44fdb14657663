use crate::dns_record::{AddressRecord, Labels, PointerRecord, ServiceRecord, TextRecord};

/// Everything learned about one service instance, assembled from one or
/// more datagrams.
///
/// A response is complete once it holds at least one pointer record, a
/// service record, a text record and an IPv4 or IPv6 address record.
/// Clearing any of those through the setters makes it incomplete again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    instance_name: Labels,
    last_update_millis: i64,
    pointer_records: Vec<PointerRecord>,
    service_record: Option<ServiceRecord>,
    text_record: Option<TextRecord>,
    inet4_address_record: Option<AddressRecord>,
    inet6_address_record: Option<AddressRecord>,
}

impl Response {
    pub fn new(instance_name: Labels, now_millis: i64) -> Self {
        Self {
            instance_name,
            last_update_millis: now_millis,
            pointer_records: Vec::new(),
            service_record: None,
            text_record: None,
            inet4_address_record: None,
            inet6_address_record: None,
        }
    }

    /// Full instance name, e.g. `Johnny's Chromecast._googlecast._tcp.local`.
    pub fn instance_name(&self) -> &Labels {
        &self.instance_name
    }

    /// Leading label of the instance name, e.g. `Johnny's Chromecast`.
    pub fn service_instance_name(&self) -> Option<&str> {
        self.instance_name.first()
    }

    pub fn matches_instance(&self, name: &Labels) -> bool {
        self.instance_name.eq_ignore_case(name)
    }

    /// Whether the service record of this response advertises `host`.
    pub fn has_host(&self, host: &Labels) -> bool {
        self.service_record
            .as_ref()
            .is_some_and(|srv| srv.host.eq_ignore_case(host))
    }

    pub fn last_update_millis(&self) -> i64 {
        self.last_update_millis
    }

    pub fn touch(&mut self, now_millis: i64) {
        self.last_update_millis = now_millis;
    }

    /// Adds a pointer record, replacing an earlier one with the same owner
    /// name. Returns `true` when the owner name was not present before.
    pub fn add_pointer_record(&mut self, record: PointerRecord) -> bool {
        match self
            .pointer_records
            .iter_mut()
            .find(|existing| existing.header.name.eq_ignore_case(&record.header.name))
        {
            Some(existing) => {
                *existing = record;
                false
            }
            None => {
                self.pointer_records.push(record);
                true
            }
        }
    }

    pub fn pointer_records(&self) -> &[PointerRecord] {
        &self.pointer_records
    }

    pub fn has_pointer_records(&self) -> bool {
        !self.pointer_records.is_empty()
    }

    pub fn clear_pointer_records(&mut self) {
        self.pointer_records.clear();
    }

    pub fn has_subtypes(&self) -> bool {
        self.pointer_records.iter().any(PointerRecord::has_subtype)
    }

    pub fn subtypes(&self) -> Vec<&str> {
        self.pointer_records
            .iter()
            .filter_map(PointerRecord::subtype)
            .collect()
    }

    pub fn service_record(&self) -> Option<&ServiceRecord> {
        self.service_record.as_ref()
    }

    pub fn set_service_record(&mut self, record: Option<ServiceRecord>) {
        self.service_record = record;
    }

    pub fn text_record(&self) -> Option<&TextRecord> {
        self.text_record.as_ref()
    }

    pub fn set_text_record(&mut self, record: Option<TextRecord>) {
        self.text_record = record;
    }

    pub fn inet4_address_record(&self) -> Option<&AddressRecord> {
        self.inet4_address_record.as_ref()
    }

    pub fn set_inet4_address_record(&mut self, record: Option<AddressRecord>) {
        self.inet4_address_record = record;
    }

    pub fn inet6_address_record(&self) -> Option<&AddressRecord> {
        self.inet6_address_record.as_ref()
    }

    pub fn set_inet6_address_record(&mut self, record: Option<AddressRecord>) {
        self.inet6_address_record = record;
    }

    pub fn is_complete(&self) -> bool {
        self.has_pointer_records()
            && self.service_record.is_some()
            && self.text_record.is_some()
            && (self.inet4_address_record.is_some() || self.inet6_address_record.is_some())
    }

    /// True when any pointer record announced its own removal (TTL 0).
    pub fn is_goodbye(&self) -> bool {
        self.pointer_records
            .iter()
            .any(|record| record.header.is_goodbye())
    }
}
