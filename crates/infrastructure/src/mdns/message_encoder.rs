use super::constants::{FLAGS_AUTHORITATIVE, FLAGS_RESPONSE};
use super::datagram::Datagram;
use super::header::MessageHeader;
use super::packet_writer::PacketWriter;
use super::record_codec::RecordCodec;
use ferrous_mdns_domain::{DomainError, MdnsRecord};
use std::net::SocketAddr;

/// Builds complete response datagrams (header, answers, additional records)
/// for announcements and test fixtures. Names are written uncompressed.
#[derive(Debug, Clone, Copy)]
pub struct MessageEncoder {
    max_packet_size: usize,
}

impl MessageEncoder {
    pub fn new(max_packet_size: usize) -> Self {
        Self { max_packet_size }
    }

    pub fn encode_response(
        &self,
        answers: &[MdnsRecord],
        additional: &[MdnsRecord],
        now_millis: i64,
        destination: SocketAddr,
    ) -> Result<Datagram, DomainError> {
        let header = MessageHeader {
            id: 0,
            flags: FLAGS_RESPONSE | FLAGS_AUTHORITATIVE,
            question_count: 0,
            answer_count: section_count(answers)?,
            authority_count: 0,
            additional_count: section_count(additional)?,
        };

        let mut writer = PacketWriter::new(self.max_packet_size);
        header.write(&mut writer)?;
        for record in answers.iter().chain(additional) {
            record.encode(&mut writer, now_millis)?;
        }
        Ok(writer.into_packet(destination))
    }
}

fn section_count(records: &[MdnsRecord]) -> Result<u16, DomainError> {
    u16::try_from(records.len()).map_err(|_| {
        DomainError::MalformedRecord(format!(
            "{} records do not fit one message section",
            records.len()
        ))
    })
}
