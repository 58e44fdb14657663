use super::datagram::Datagram;
use super::packet_reader::MAX_LABEL_LEN;
use bytes::{BufMut, BytesMut};
use ferrous_mdns_domain::{DomainError, Labels};
use std::net::SocketAddr;

/// Append-only writer producing one outgoing datagram.
///
/// Names are always written in full; no compression pointers are emitted.
#[derive(Debug)]
pub struct PacketWriter {
    buffer: BytesMut,
    max_size: usize,
}

impl PacketWriter {
    pub fn new(max_size: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(max_size.min(1500)),
            max_size,
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn position(&self) -> usize {
        self.buffer.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    fn reserve(&self, len: usize) -> Result<(), DomainError> {
        let needed = self.buffer.len() + len;
        if needed > self.max_size {
            return Err(DomainError::BufferOverflow {
                needed,
                capacity: self.max_size,
            });
        }
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), DomainError> {
        self.reserve(1)?;
        self.buffer.put_u8(value);
        Ok(())
    }

    pub fn write_u16(&mut self, value: u16) -> Result<(), DomainError> {
        self.reserve(2)?;
        self.buffer.put_u16(value);
        Ok(())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<(), DomainError> {
        self.reserve(4)?;
        self.buffer.put_u32(value);
        Ok(())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), DomainError> {
        self.reserve(bytes.len())?;
        self.buffer.put_slice(bytes);
        Ok(())
    }

    /// Writes one length-prefixed character string.
    pub fn write_string(&mut self, bytes: &[u8]) -> Result<(), DomainError> {
        let len = u8::try_from(bytes.len()).map_err(|_| {
            DomainError::MalformedRecord(format!(
                "character string of {} bytes exceeds 255",
                bytes.len()
            ))
        })?;
        self.reserve(1 + bytes.len())?;
        self.buffer.put_u8(len);
        self.buffer.put_slice(bytes);
        Ok(())
    }

    pub fn write_labels(&mut self, labels: &Labels) -> Result<(), DomainError> {
        for label in labels.iter() {
            if label.is_empty() || label.len() > MAX_LABEL_LEN {
                return Err(DomainError::MalformedName(format!(
                    "label '{}' must be 1 to {} bytes long",
                    label, MAX_LABEL_LEN
                )));
            }
            self.reserve(1 + label.len())?;
            self.buffer.put_u8(label.len() as u8);
            self.buffer.put_slice(label.as_bytes());
        }
        self.write_u8(0)
    }

    /// Overwrites two already written bytes, used to backfill length fields.
    pub fn patch_u16(&mut self, offset: usize, value: u16) -> Result<(), DomainError> {
        if offset + 2 > self.buffer.len() {
            return Err(DomainError::BufferOverflow {
                needed: offset + 2,
                capacity: self.buffer.len(),
            });
        }
        self.buffer[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// Finishes the packet, bound to `address` as its destination.
    pub fn into_packet(self, address: SocketAddr) -> Datagram {
        Datagram::new(self.buffer.freeze(), Some(address))
    }
}
