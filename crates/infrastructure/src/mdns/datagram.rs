use super::packet_reader::PacketReader;
use bytes::Bytes;
use std::net::SocketAddr;

/// An immutable datagram payload together with the socket address it came
/// from or is destined to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datagram {
    data: Bytes,
    address: Option<SocketAddr>,
}

impl Datagram {
    pub fn new(data: impl Into<Bytes>, address: Option<SocketAddr>) -> Self {
        Self {
            data: data.into(),
            address,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn address(&self) -> Option<SocketAddr> {
        self.address
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn reader(&self) -> PacketReader<'_> {
        match self.address {
            Some(address) => PacketReader::with_address(&self.data, address),
            None => PacketReader::new(&self.data),
        }
    }
}
