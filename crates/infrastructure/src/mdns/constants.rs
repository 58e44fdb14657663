use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

pub const MDNS_PORT: u16 = 5353;
pub const MDNS_IPV4_ADDR: Ipv4Addr = Ipv4Addr::new(224, 0, 0, 251);
pub const MDNS_IPV6_ADDR: Ipv6Addr = Ipv6Addr::new(0xff02, 0, 0, 0, 0, 0, 0, 0xfb);

pub const HEADER_LEN: usize = 12;

/// QR, opcode and rcode bits; AA, TC, RD, RA and Z are ignored.
pub const FLAGS_RESPONSE_MASK: u16 = 0xF80F;
pub const FLAGS_RESPONSE: u16 = 0x8000;
pub const FLAGS_AUTHORITATIVE: u16 = 0x0400;

pub fn mdns_ipv4_socket() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(MDNS_IPV4_ADDR), MDNS_PORT)
}

pub fn mdns_ipv6_socket() -> SocketAddr {
    SocketAddr::new(IpAddr::V6(MDNS_IPV6_ADDR), MDNS_PORT)
}
