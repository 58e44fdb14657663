use ferrous_mdns_domain::{DomainError, Labels};
use std::net::SocketAddr;

pub const MAX_LABEL_LEN: usize = 63;

/// Upper bound on compression pointers followed while reading one name.
pub const MAX_POINTER_HOPS: usize = 128;

/// A 255-byte name holds at most 127 one-byte labels.
const MAX_NAME_LABELS: usize = 127;

const POINTER_MASK: u8 = 0xC0;

/// Positional reader over one received datagram.
///
/// All multi-byte reads are big-endian. Reads are confined to a limit that
/// starts at the end of the buffer and can be narrowed with
/// [`PacketReader::with_limit`] while decoding a record's data; compression
/// pointers may still reach any earlier byte of the packet.
#[derive(Debug, Clone)]
pub struct PacketReader<'a> {
    data: &'a [u8],
    position: usize,
    limit: usize,
    address: Option<SocketAddr>,
}

impl<'a> PacketReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            limit: data.len(),
            address: None,
        }
    }

    pub fn with_address(data: &'a [u8], address: SocketAddr) -> Self {
        Self {
            address: Some(address),
            ..Self::new(data)
        }
    }

    /// Socket address the datagram was received from, if known.
    pub fn address(&self) -> Option<SocketAddr> {
        self.address
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn ensure(&self, needed: usize) -> Result<(), DomainError> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(DomainError::TruncatedInput { needed, remaining });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, DomainError> {
        self.ensure(1)?;
        let value = self.data[self.position];
        self.position += 1;
        Ok(value)
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, DomainError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DomainError> {
        self.ensure(len)?;
        let bytes = &self.data[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), DomainError> {
        self.ensure(len)?;
        self.position += len;
        Ok(())
    }

    /// Reads one length-prefixed character string (RFC 1035 §3.3).
    pub fn read_string(&mut self) -> Result<&'a [u8], DomainError> {
        let len = self.read_u8()? as usize;
        self.read_bytes(len)
    }

    /// Runs `f` with reads confined to the next `len` bytes, then leaves the
    /// cursor exactly `len` bytes further on whatever `f` consumed.
    pub fn with_limit<T, F>(&mut self, len: usize, f: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut Self) -> Result<T, DomainError>,
    {
        self.ensure(len)?;
        let saved_limit = self.limit;
        let end = self.position + len;
        self.limit = end;
        let result = f(self);
        self.limit = saved_limit;
        self.position = end;
        result
    }

    /// Reads a possibly compressed domain name.
    ///
    /// A compression pointer must target an offset strictly before the
    /// pointer itself, and at most [`MAX_POINTER_HOPS`] pointers are followed,
    /// so cyclic or forward chains fail instead of looping. After a pointer
    /// the cursor resumes right behind the first pointer encountered.
    pub fn read_labels(&mut self) -> Result<Labels, DomainError> {
        let mut labels = Labels::default();
        let mut offset = self.position;
        let mut bound = self.limit;
        let mut resume_at = None;
        let mut hops = 0;

        loop {
            if offset >= bound {
                return Err(DomainError::MalformedName(format!(
                    "name at offset {} runs past end of data",
                    self.position
                )));
            }
            let len = self.data[offset];

            match len & POINTER_MASK {
                0x00 if len == 0 => {
                    offset += 1;
                    break;
                }
                0x00 => {
                    let start = offset + 1;
                    let end = start + len as usize;
                    if end > bound {
                        return Err(DomainError::MalformedName(format!(
                            "label of {} bytes at offset {} runs past end of data",
                            len, offset
                        )));
                    }
                    if labels.len() >= MAX_NAME_LABELS {
                        return Err(DomainError::MalformedName(format!(
                            "name at offset {} has more than {} labels",
                            self.position, MAX_NAME_LABELS
                        )));
                    }
                    let label = std::str::from_utf8(&self.data[start..end]).map_err(|_| {
                        DomainError::MalformedName(format!(
                            "label at offset {} is not valid UTF-8",
                            offset
                        ))
                    })?;
                    labels.push(label);
                    offset = end;
                }
                POINTER_MASK => {
                    if offset + 1 >= bound {
                        return Err(DomainError::MalformedName(format!(
                            "truncated compression pointer at offset {}",
                            offset
                        )));
                    }
                    let target = (usize::from(len & !POINTER_MASK) << 8)
                        | usize::from(self.data[offset + 1]);
                    if target >= offset {
                        return Err(DomainError::MalformedName(format!(
                            "compression pointer at offset {} targets offset {}",
                            offset, target
                        )));
                    }
                    hops += 1;
                    if hops > MAX_POINTER_HOPS {
                        return Err(DomainError::MalformedName(format!(
                            "name at offset {} follows more than {} compression pointers",
                            self.position, MAX_POINTER_HOPS
                        )));
                    }
                    if resume_at.is_none() {
                        resume_at = Some(offset + 2);
                    }
                    offset = target;
                    bound = self.data.len();
                }
                _ => {
                    return Err(DomainError::MalformedName(format!(
                        "reserved label type 0x{:02x} at offset {}",
                        len, offset
                    )));
                }
            }
        }

        self.position = resume_at.unwrap_or(offset);
        Ok(labels)
    }
}
