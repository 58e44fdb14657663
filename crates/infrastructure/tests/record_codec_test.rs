use ferrous_mdns_domain::{DomainError, MdnsRecord, RecordType};
use ferrous_mdns_infrastructure::mdns::constants::{mdns_ipv4_socket, mdns_ipv6_socket};
use ferrous_mdns_infrastructure::mdns::{
    decode_record, decode_record_body, PacketReader, PacketWriter, RecordCodec,
};
use std::net::{Ipv4Addr, Ipv6Addr};

mod fixtures;
use fixtures::*;

const MAX_PACKET_SIZE: usize = 4096;
const RECEIPT_TIME: i64 = 1_700_000_000_000;

/// Mirrors how the decoder reads a record: name, type code, then the body.
fn decode_fixture(data: &[u8], expected_type: RecordType) -> MdnsRecord {
    let mut reader = PacketReader::new(data);
    let name = reader.read_labels().unwrap();
    assert_eq!(name.len(), 1);
    assert_eq!(name.to_string(), "test");

    let type_code = reader.read_u16().unwrap();
    assert_eq!(type_code, expected_type.to_u16());

    let record = decode_record_body(name, type_code, &mut reader, RECEIPT_TIME)
        .unwrap()
        .expect("supported record type");
    assert!(reader.is_empty(), "record should consume the whole fixture");
    record
}

fn encode(record: &MdnsRecord, ipv6: bool) -> Vec<u8> {
    let mut writer = PacketWriter::new(MAX_PACKET_SIZE);
    record
        .encode(&mut writer, record.receipt_time_millis())
        .unwrap();
    let destination = if ipv6 {
        mdns_ipv6_socket()
    } else {
        mdns_ipv4_socket()
    };
    writer.into_packet(destination).data().to_vec()
}

#[test]
fn test_inet4_address_record() {
    let data = bytes(A_RECORD);
    let record = decode_fixture(&data, RecordType::A);

    let MdnsRecord::Address(address) = &record else {
        panic!("Expected address record");
    };
    assert_eq!(address.inet4_address(), Some(Ipv4Addr::new(10, 1, 2, 3)));
    assert_eq!(address.inet6_address(), None);
    assert_eq!(address.header.ttl, 4500);
    assert_eq!(address.header.class, 1);
    assert!(!address.header.cache_flush);
    assert_eq!(address.header.receipt_time_millis, RECEIPT_TIME);

    assert_eq!(encode(&record, false), data);
}

#[test]
fn test_type_aaaa_inet6_address_record() {
    let data = bytes(AAAA_RECORD);
    let record = decode_fixture(&data, RecordType::AAAA);

    let MdnsRecord::Address(address) = &record else {
        panic!("Expected address record");
    };
    assert_eq!(address.inet4_address(), None);
    let expected: Ipv6Addr = "aabb:ccdd:1122:3344:a0b0:c0d0:1020:3040".parse().unwrap();
    assert_eq!(address.inet6_address(), Some(expected));

    assert_eq!(encode(&record, true), data);
}

#[test]
fn test_type_aaaa_inet4_mapped_address_record() {
    let data = bytes(AAAA_MAPPED_IPV4_RECORD);
    let record = decode_fixture(&data, RecordType::AAAA);

    let MdnsRecord::Address(address) = &record else {
        panic!("Expected address record");
    };
    assert_eq!(address.inet6_address(), None);
    assert_eq!(address.inet4_address(), Some(Ipv4Addr::new(16, 32, 48, 64)));
    assert_eq!(address.header.record_type, RecordType::AAAA);

    assert_eq!(encode(&record, false), bytes(AAAA_MAPPED_IPV4_ENCODED));
}

#[test]
fn test_pointer_record() {
    let data = bytes(PTR_RECORD);
    let record = decode_fixture(&data, RecordType::PTR);

    let MdnsRecord::Pointer(pointer) = &record else {
        panic!("Expected pointer record");
    };
    assert_eq!(pointer.pointer().to_string(), "foo.bar.quxx");
    assert!(!pointer.has_subtype());
    assert_eq!(pointer.subtype(), None);

    assert_eq!(encode(&record, false), data);
}

#[test]
fn test_service_record() {
    let data = bytes(SRV_RECORD);
    let record = decode_fixture(&data, RecordType::SRV);

    let MdnsRecord::Service(service) = &record else {
        panic!("Expected service record");
    };
    assert_eq!(service.port, 8008);
    assert_eq!(service.host.to_string(), "foo.bar.quxx");
    assert_eq!(service.priority, 1);
    assert_eq!(service.weight, 255);

    assert_eq!(encode(&record, false), data);
}

#[test]
fn test_text_record() {
    let data = bytes(TXT_RECORD);
    let record = decode_fixture(&data, RecordType::TXT);

    let MdnsRecord::Text(text) = &record else {
        panic!("Expected text record");
    };
    assert_eq!(
        text.strings(),
        vec!["a=hello there", "b=1234567890", "xyz=!@#$"]
    );
    assert_eq!(text.value("b"), Some(&b"1234567890"[..]));

    assert_eq!(encode(&record, false), data);
}

#[test]
fn test_decode_after_encode_yields_equal_record() {
    let data = bytes(SRV_RECORD);
    let original = decode_fixture(&data, RecordType::SRV);
    let encoded = encode(&original, false);

    let mut reader = PacketReader::new(&encoded);
    let decoded = decode_record(&mut reader, RECEIPT_TIME).unwrap().unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn test_encode_writes_remaining_ttl() {
    let data = bytes(A_RECORD);
    let record = decode_fixture(&data, RecordType::A);

    let mut writer = PacketWriter::new(MAX_PACKET_SIZE);
    record.encode(&mut writer, RECEIPT_TIME + 500_000).unwrap();

    let mut reader = PacketReader::new(writer.as_bytes());
    let decoded = decode_record(&mut reader, RECEIPT_TIME).unwrap().unwrap();
    assert_eq!(decoded.ttl(), 4000);

    let mut writer = PacketWriter::new(MAX_PACKET_SIZE);
    record.encode(&mut writer, RECEIPT_TIME + 10_000_000).unwrap();
    let mut reader = PacketReader::new(writer.as_bytes());
    let decoded = decode_record(&mut reader, RECEIPT_TIME).unwrap().unwrap();
    assert_eq!(decoded.ttl(), 0);
}

#[test]
fn test_cache_flush_bit_is_stripped_and_restored() {
    // test. A IN|cache-flush 120s 192.168.1.2
    let data = hex::decode("04746573740000018001000000780004C0A80102").unwrap();
    let mut reader = PacketReader::new(&data);

    let record = decode_record(&mut reader, 0).unwrap().unwrap();

    assert_eq!(record.header().class, 1);
    assert!(record.header().cache_flush);
    assert_eq!(encode(&record, false), data);
}

#[test]
fn test_unsupported_type_is_skipped_by_declared_length() {
    // NSEC record for `test` followed by an A record.
    let mut data = hex::decode("047465737400002F800100001194000500FF000140").unwrap();
    data.extend(bytes(A_RECORD));
    let mut reader = PacketReader::new(&data);

    assert_eq!(decode_record(&mut reader, 0).unwrap(), None);
    let next = decode_record(&mut reader, 0).unwrap().unwrap();

    assert_eq!(next.record_type(), RecordType::A);
    assert!(reader.is_empty());
}

#[test]
fn test_payload_shorter_than_rdlength_still_advances() {
    // PTR with rdlength 16 whose name ends after 9 bytes; 7 padding bytes.
    let data = hex::decode(concat!(
        "047465737400000C00010000119400100366",
        "6F6F036261720000000000000000",
        "0474657374000001000100001194000401020304"
    ))
    .unwrap();
    let mut reader = PacketReader::new(&data);

    let first = decode_record(&mut reader, 0).unwrap().unwrap();
    let second = decode_record(&mut reader, 0).unwrap().unwrap();

    let MdnsRecord::Pointer(pointer) = first else {
        panic!("Expected pointer record");
    };
    assert_eq!(pointer.pointer().to_string(), "foo.bar");
    assert_eq!(second.record_type(), RecordType::A);
}

#[test]
fn test_address_with_wrong_length_is_malformed() {
    let data = hex::decode("047465737400000100010000119400030A0102").unwrap();
    let mut reader = PacketReader::new(&data);

    let result = decode_record(&mut reader, 0);

    assert!(matches!(result, Err(DomainError::MalformedRecord(_))));
}

#[test]
fn test_rdlength_past_end_is_truncated() {
    let data = hex::decode("047465737400000100010000119400080A010203").unwrap();
    let mut reader = PacketReader::new(&data);

    let result = decode_record(&mut reader, 0);

    assert_eq!(
        result,
        Err(DomainError::TruncatedInput {
            needed: 8,
            remaining: 4
        })
    );
}

#[test]
fn test_text_entry_running_past_rdlength_is_truncated() {
    // rdlength 3 but the single entry claims 5 bytes.
    let data = hex::decode("0474657374000010000100001194000305616263646566").unwrap();
    let mut reader = PacketReader::new(&data);

    let result = decode_record(&mut reader, 0);

    assert!(matches!(result, Err(DomainError::TruncatedInput { .. })));
}
