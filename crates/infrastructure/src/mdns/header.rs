use super::constants::{FLAGS_RESPONSE, FLAGS_RESPONSE_MASK};
use super::packet_reader::PacketReader;
use super::packet_writer::PacketWriter;
use ferrous_mdns_domain::DomainError;

/// The 12-byte message header (RFC 1035 §4.1.1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageHeader {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl MessageHeader {
    pub fn read(reader: &mut PacketReader<'_>) -> Result<Self, DomainError> {
        Ok(Self {
            id: reader.read_u16()?,
            flags: reader.read_u16()?,
            question_count: reader.read_u16()?,
            answer_count: reader.read_u16()?,
            authority_count: reader.read_u16()?,
            additional_count: reader.read_u16()?,
        })
    }

    pub fn write(&self, writer: &mut PacketWriter) -> Result<(), DomainError> {
        writer.write_u16(self.id)?;
        writer.write_u16(self.flags)?;
        writer.write_u16(self.question_count)?;
        writer.write_u16(self.answer_count)?;
        writer.write_u16(self.authority_count)?;
        writer.write_u16(self.additional_count)
    }

    /// Standard query response with no error: QR set, opcode 0, rcode 0.
    pub fn is_response(&self) -> bool {
        self.flags & FLAGS_RESPONSE_MASK == FLAGS_RESPONSE
    }

    /// Records declared across the answer, authority and additional sections.
    pub fn record_count(&self) -> usize {
        usize::from(self.answer_count)
            + usize::from(self.authority_count)
            + usize::from(self.additional_count)
    }
}
