#![allow(dead_code)]

/// Cast device answering a `_googlecast._tcp.local` query: TXT, two PTR
/// records (one DNS-SD enumeration, one instance), SRV, A and two NSEC
/// records, heavily compressed.
pub const CHROMECAST_RESPONSE: &str = concat!(
    "0000840000000004",
    "00000003134A6F68",
    "6E6E792773204368",
    "726F6D6563617374",
    "0B5F676F6F676C65",
    "63617374045F7463",
    "70056C6F63616C00",
    "0010800100001194",
    "006C2369643D3937",
    "3062663534376237",
    "3533666336336332",
    "6432613336626238",
    "3936616261380576",
    "653D30320D6D643D",
    "4368726F6D656361",
    "73741269633D2F73",
    "657475702F69636F",
    "6E2E706E6716666E",
    "3D4A6F686E6E7927",
    "73204368726F6D65",
    "636173740463613D",
    "350473743D30095F",
    "7365727669636573",
    "075F646E732D7364",
    "045F756470C03100",
    "0C00010000119400",
    "02C020C020000C00",
    "01000011940002C0",
    "0CC00C0021800100",
    "000078001C000000",
    "001F49134A6F686E",
    "6E79277320436872",
    "6F6D6563617374C0",
    "31C0F30001800100",
    "0000780004C0A864",
    "68C0F3002F800100",
    "0000780005C0F300",
    "0140C00C002F8001",
    "000011940009C00C",
    "00050000800040",
);

/// Smart speaker answering over IPv6: PTR, TXT, SRV and AAAA records,
/// followed by bytes not covered by the header counts.
pub const GOOGLE_HOME_IPV6_RESPONSE: &str = concat!(
    "0000840000000001000000030B5F676F6F676C656361737404",
    "5F746370056C6F63616C00000C000100000078003330476F6F676C",
    "652D486F6D652D4D61782D61363836666331323961366638636265",
    "31643636353139343065336164353766C00CC02E00108001000011",
    "9400C02369643D6136383666633132396136663863626531643636",
    "3531393430653361643537662363643D4133304233303032363546",
    "36384341313233353532434639344141353742314613726D3D4335",
    "35393134383530383841313638330576653D3035126D643D476F6F",
    "676C6520486F6D65204D61781269633D2F73657475702F69636F6E",
    "2E706E6710666E3D417474696320737065616B65720863613D3130",
    "3234340473743D320F62733D464138464341363734453537046E66",
    "3D320372733DC02E0021800100000078002D000000001F49246136",
    "3836666331322D396136662D386362652D316436362D3531393430",
    "65336164353766C01DC13F001C8001000000780010200033330000",
    "0000DA6C63FFFE7C74830109018001000000780004C0A801026C6F",
    "63616C0000018001000000780004C0A8010A000001800100000078",
    "0004C0A8010A00000000000000",
);

/// Single uncompressed records, each owned by the name `test`.
pub const A_RECORD: &str = concat!("0474657374000001", "0001000011940004", "0A010203");

pub const AAAA_RECORD: &str = concat!(
    "047465737400001C",
    "0001000011940010",
    "AABBCCDD11223344",
    "A0B0C0D010203040",
);

pub const AAAA_MAPPED_IPV4_RECORD: &str = concat!(
    "047465737400001C",
    "0001000011940010",
    "0000000000000000",
    "0000FFFF10203040",
);

/// What the mapped record above encodes back to: same type, four bytes.
pub const AAAA_MAPPED_IPV4_ENCODED: &str = "047465737400001C000100001194000410203040";

pub const PTR_RECORD: &str = concat!(
    "047465737400000C",
    "000100001194000E",
    "03666F6F03626172",
    "047175787800",
);

pub const SRV_RECORD: &str = concat!(
    "0474657374000021",
    "0001000011940014",
    "000100FF1F480366",
    "6F6F036261720471",
    "75787800",
);

pub const TXT_RECORD: &str = concat!(
    "0474657374000010",
    "0001000011940024",
    "0D613D68656C6C6F",
    "2074686572650C62",
    "3D31323334353637",
    "3839300878797A3D",
    "21402324",
);

pub fn bytes(fixture: &str) -> Vec<u8> {
    hex::decode(fixture).expect("fixture is valid hex")
}
