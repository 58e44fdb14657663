use super::clock::Clock;
use super::datagram::Datagram;
use super::header::MessageHeader;
use super::packet_reader::PacketReader;
use super::record_codec::decode_record;
use ferrous_mdns_domain::{DecoderConfig, DomainError, Labels, MdnsRecord, Response};
use std::sync::Arc;
use tracing::debug;

/// What one successful [`ResponseDecoder::decode`] call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeSummary {
    pub header: MessageHeader,
    /// Records of a supported type that were decoded.
    pub records: usize,
    /// Records of an unsupported type skipped by their declared length.
    pub skipped: usize,
    /// Responses appended to the caller's collection.
    pub created: usize,
    /// Responses that already existed and received at least one record.
    pub updated: usize,
}

/// Turns response datagrams into per-instance [`Response`] aggregates.
///
/// The decoder holds no mutable state: concurrent calls on different
/// datagrams are safe, and callers sharing one response collection across
/// threads must lock it themselves.
pub struct ResponseDecoder {
    clock: Arc<dyn Clock>,
    service_type: Option<Labels>,
}

const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResponseDecoder>();
};

impl ResponseDecoder {
    /// `service_type` restricts output to one service type such as
    /// `_googlecast._tcp.local`; `None` keeps every instance found.
    pub fn new(clock: Arc<dyn Clock>, service_type: Option<Labels>) -> Self {
        Self {
            clock,
            service_type,
        }
    }

    pub fn from_config(clock: Arc<dyn Clock>, config: &DecoderConfig) -> Self {
        Self::new(clock, config.service_type_labels())
    }

    pub fn service_type(&self) -> Option<&Labels> {
        self.service_type.as_ref()
    }

    pub fn decode(
        &self,
        datagram: &Datagram,
        responses: &mut Vec<Response>,
    ) -> Result<DecodeSummary, DomainError> {
        self.decode_with_reader(datagram.reader(), responses)
    }

    pub fn decode_bytes(
        &self,
        data: &[u8],
        responses: &mut Vec<Response>,
    ) -> Result<DecodeSummary, DomainError> {
        self.decode_with_reader(PacketReader::new(data), responses)
    }

    /// Decodes every declared record before touching `responses`, so a
    /// datagram that fails part-way leaves the collection unchanged.
    fn decode_with_reader(
        &self,
        mut reader: PacketReader<'_>,
        responses: &mut Vec<Response>,
    ) -> Result<DecodeSummary, DomainError> {
        let now = self.clock.now_millis();
        let header = MessageHeader::read(&mut reader)?;

        if !header.is_response() {
            return Err(DomainError::NotResponseMessage(header.flags));
        }
        if header.answer_count == 0 {
            return Err(DomainError::NoAnswers);
        }

        for _ in 0..header.question_count {
            reader.read_labels()?;
            reader.skip(4)?;
        }

        let declared = header.record_count();
        let mut records = Vec::with_capacity(declared);
        let mut skipped = 0;
        for decoded in 0..declared {
            if reader.is_empty() {
                return Err(DomainError::UnreconciledCounts { declared, decoded });
            }
            match decode_record(&mut reader, now)? {
                Some(record) => records.push(record),
                None => skipped += 1,
            }
        }

        if !reader.is_empty() {
            debug!(
                trailing = reader.remaining(),
                peer = ?reader.address(),
                "Ignoring bytes after declared records"
            );
        }

        let (created, updated) = self.merge(&records, responses, now);
        debug!(
            records = records.len(),
            skipped,
            created,
            updated,
            peer = ?reader.address(),
            "Decoded mDNS response"
        );

        Ok(DecodeSummary {
            header,
            records: records.len(),
            skipped,
            created,
            updated,
        })
    }

    fn accepts(&self, service_type: &Labels) -> bool {
        match &self.service_type {
            Some(filter) => filter.eq_ignore_case(service_type),
            None => true,
        }
    }

    /// An instance name is one label in front of its service type.
    fn accepts_owner(&self, owner: &Labels) -> bool {
        match &self.service_type {
            Some(filter) => owner.len() == filter.len() + 1 && filter.is_suffix_of(owner),
            None => owner.len() >= 2,
        }
    }

    /// Folds decoded records into `responses`: pointer records first since
    /// they name the instances, then SRV/TXT by owner name, then addresses
    /// by the host their SRV record advertises.
    fn merge(
        &self,
        records: &[MdnsRecord],
        responses: &mut Vec<Response>,
        now: i64,
    ) -> (usize, usize) {
        let existing = responses.len();
        let mut touched = Vec::new();

        for record in records {
            let MdnsRecord::Pointer(pointer) = record else {
                continue;
            };
            if !self.accepts(&pointer.service_type()) {
                continue;
            }
            let index = match find_instance(responses, pointer.pointer()) {
                Some(index) => index,
                None => {
                    responses.push(Response::new(pointer.pointer().clone(), now));
                    responses.len() - 1
                }
            };
            responses[index].add_pointer_record(pointer.clone());
            touched.push(index);
        }

        for record in records {
            let index = match record {
                MdnsRecord::Service(service) => {
                    let index = self.instance_for_owner(responses, &service.header.name, now);
                    if let Some(index) = index {
                        responses[index].set_service_record(Some(service.clone()));
                    }
                    index
                }
                MdnsRecord::Text(text) => {
                    let index = self.instance_for_owner(responses, &text.header.name, now);
                    if let Some(index) = index {
                        responses[index].set_text_record(Some(text.clone()));
                    }
                    index
                }
                _ => None,
            };
            touched.extend(index);
        }

        for record in records {
            let MdnsRecord::Address(address) = record else {
                continue;
            };
            for (index, response) in responses.iter_mut().enumerate() {
                if !response.has_host(&address.header.name) {
                    continue;
                }
                if address.inet4_address().is_some() {
                    response.set_inet4_address_record(Some(address.clone()));
                } else {
                    response.set_inet6_address_record(Some(address.clone()));
                }
                touched.push(index);
            }
        }

        touched.sort_unstable();
        touched.dedup();
        for &index in &touched {
            responses[index].touch(now);
        }

        let created = responses.len() - existing;
        let updated = touched.iter().filter(|&&index| index < existing).count();
        (created, updated)
    }

    /// SRV and TXT records are owned by the instance name itself. Without a
    /// matching response one is started when the owner's service type (the
    /// name minus its instance label) passes the filter.
    fn instance_for_owner(
        &self,
        responses: &mut Vec<Response>,
        owner: &Labels,
        now: i64,
    ) -> Option<usize> {
        if let Some(index) = find_instance(responses, owner) {
            return Some(index);
        }
        if !self.accepts_owner(owner) {
            return None;
        }
        responses.push(Response::new(owner.clone(), now));
        Some(responses.len() - 1)
    }
}

fn find_instance(responses: &[Response], instance_name: &Labels) -> Option<usize> {
    responses
        .iter()
        .position(|response| response.matches_instance(instance_name))
}
