use super::packet_reader::PacketReader;
use super::packet_writer::PacketWriter;
use ferrous_mdns_domain::{
    AddressRecord, DomainError, Labels, MdnsRecord, PointerRecord, RecordHeader, RecordType,
    ServiceRecord, TextRecord,
};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use tracing::trace;

/// Wire encoding of one record variant's data section.
///
/// `decode_rdata` is handed a reader already confined to the record's
/// declared data length; the caller moves past that length afterwards.
pub trait RecordCodec: Sized {
    fn header(&self) -> &RecordHeader;

    fn decode_rdata(header: RecordHeader, reader: &mut PacketReader<'_>)
        -> Result<Self, DomainError>;

    fn encode_rdata(&self, writer: &mut PacketWriter) -> Result<(), DomainError>;

    /// Writes the full record. The TTL written is what remains of it at
    /// `now_millis`, so a record re-sent at its receipt time keeps its TTL.
    fn encode(&self, writer: &mut PacketWriter, now_millis: i64) -> Result<(), DomainError> {
        let header = self.header();
        writer.write_labels(&header.name)?;
        writer.write_u16(header.record_type.to_u16())?;
        writer.write_u16(header.wire_class())?;
        let remaining_secs = header.remaining_ttl_millis(now_millis) / 1000;
        writer.write_u32(u32::try_from(remaining_secs).unwrap_or(u32::MAX))?;

        let length_at = writer.position();
        writer.write_u16(0)?;
        self.encode_rdata(writer)?;
        let rdlength = writer.position() - length_at - 2;
        let rdlength = u16::try_from(rdlength).map_err(|_| {
            DomainError::MalformedRecord(format!(
                "{} record data of {} bytes does not fit a length field",
                header.record_type, rdlength
            ))
        })?;
        writer.patch_u16(length_at, rdlength)
    }
}

impl RecordCodec for AddressRecord {
    fn header(&self) -> &RecordHeader {
        &self.header
    }

    fn decode_rdata(
        header: RecordHeader,
        reader: &mut PacketReader<'_>,
    ) -> Result<Self, DomainError> {
        let address = match reader.remaining() {
            4 => {
                let b = reader.read_bytes(4)?;
                IpAddr::V4(Ipv4Addr::new(b[0], b[1], b[2], b[3]))
            }
            16 => {
                let mut octets = [0u8; 16];
                octets.copy_from_slice(reader.read_bytes(16)?);
                IpAddr::V6(Ipv6Addr::from(octets))
            }
            len => {
                return Err(DomainError::MalformedRecord(format!(
                    "{} record for {} carries {} address bytes",
                    header.record_type, header.name, len
                )));
            }
        };
        Ok(AddressRecord::new(header, address))
    }

    fn encode_rdata(&self, writer: &mut PacketWriter) -> Result<(), DomainError> {
        match self.address() {
            IpAddr::V4(v4) => writer.write_bytes(&v4.octets()),
            IpAddr::V6(v6) => writer.write_bytes(&v6.octets()),
        }
    }
}

impl RecordCodec for PointerRecord {
    fn header(&self) -> &RecordHeader {
        &self.header
    }

    fn decode_rdata(
        header: RecordHeader,
        reader: &mut PacketReader<'_>,
    ) -> Result<Self, DomainError> {
        let pointer = reader.read_labels()?;
        Ok(PointerRecord::new(header, pointer))
    }

    fn encode_rdata(&self, writer: &mut PacketWriter) -> Result<(), DomainError> {
        writer.write_labels(self.pointer())
    }
}

impl RecordCodec for ServiceRecord {
    fn header(&self) -> &RecordHeader {
        &self.header
    }

    fn decode_rdata(
        header: RecordHeader,
        reader: &mut PacketReader<'_>,
    ) -> Result<Self, DomainError> {
        let priority = reader.read_u16()?;
        let weight = reader.read_u16()?;
        let port = reader.read_u16()?;
        let host = reader.read_labels()?;
        Ok(ServiceRecord::new(header, priority, weight, port, host))
    }

    fn encode_rdata(&self, writer: &mut PacketWriter) -> Result<(), DomainError> {
        writer.write_u16(self.priority)?;
        writer.write_u16(self.weight)?;
        writer.write_u16(self.port)?;
        writer.write_labels(&self.host)
    }
}

impl RecordCodec for TextRecord {
    fn header(&self) -> &RecordHeader {
        &self.header
    }

    fn decode_rdata(
        header: RecordHeader,
        reader: &mut PacketReader<'_>,
    ) -> Result<Self, DomainError> {
        let mut entries = Vec::new();
        while !reader.is_empty() {
            entries.push(reader.read_string()?.to_vec());
        }
        Ok(TextRecord::new(header, entries))
    }

    fn encode_rdata(&self, writer: &mut PacketWriter) -> Result<(), DomainError> {
        for entry in self.entries() {
            writer.write_string(entry)?;
        }
        Ok(())
    }
}

impl RecordCodec for MdnsRecord {
    fn header(&self) -> &RecordHeader {
        MdnsRecord::header(self)
    }

    fn decode_rdata(
        header: RecordHeader,
        reader: &mut PacketReader<'_>,
    ) -> Result<Self, DomainError> {
        Ok(match header.record_type {
            RecordType::A | RecordType::AAAA => AddressRecord::decode_rdata(header, reader)?.into(),
            RecordType::PTR => PointerRecord::decode_rdata(header, reader)?.into(),
            RecordType::SRV => ServiceRecord::decode_rdata(header, reader)?.into(),
            RecordType::TXT => TextRecord::decode_rdata(header, reader)?.into(),
        })
    }

    fn encode_rdata(&self, writer: &mut PacketWriter) -> Result<(), DomainError> {
        match self {
            MdnsRecord::Address(r) => r.encode_rdata(writer),
            MdnsRecord::Pointer(r) => r.encode_rdata(writer),
            MdnsRecord::Service(r) => r.encode_rdata(writer),
            MdnsRecord::Text(r) => r.encode_rdata(writer),
        }
    }
}

/// Decodes what follows a record's name and type code: class, TTL, data
/// length and data. Records of unsupported types are skipped by their
/// declared length and yield `None`.
pub fn decode_record_body(
    name: Labels,
    type_code: u16,
    reader: &mut PacketReader<'_>,
    now_millis: i64,
) -> Result<Option<MdnsRecord>, DomainError> {
    let wire_class = reader.read_u16()?;
    let ttl = reader.read_u32()?;
    let rdlength = usize::from(reader.read_u16()?);

    let Some(record_type) = RecordType::from_u16(type_code) else {
        trace!(name = %name, type_code, rdlength, "Skipping unsupported record type");
        reader.skip(rdlength)?;
        return Ok(None);
    };

    let header = RecordHeader::new(name, record_type, ttl)
        .with_wire_class(wire_class)
        .with_receipt_time(now_millis);

    let record = reader.with_limit(rdlength, |rdata| MdnsRecord::decode_rdata(header, rdata))?;
    trace!(name = %record.name(), record_type = %record_type, ttl, "Decoded record");
    Ok(Some(record))
}

/// Decodes one complete resource record at the reader's position.
pub fn decode_record(
    reader: &mut PacketReader<'_>,
    now_millis: i64,
) -> Result<Option<MdnsRecord>, DomainError> {
    let name = reader.read_labels()?;
    let type_code = reader.read_u16()?;
    decode_record_body(name, type_code, reader, now_millis)
}
