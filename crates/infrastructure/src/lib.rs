//! Ferrous mDNS Infrastructure Layer: wire codec and response assembly.
pub mod mdns;
