pub mod clock;
pub mod constants;
pub mod datagram;
pub mod header;
pub mod message_encoder;
pub mod packet_reader;
pub mod packet_writer;
pub mod record_codec;
pub mod response_decoder;

pub use clock::{Clock, ManualClock, SystemClock};
pub use datagram::Datagram;
pub use header::MessageHeader;
pub use message_encoder::MessageEncoder;
pub use packet_reader::PacketReader;
pub use packet_writer::PacketWriter;
pub use record_codec::{decode_record, decode_record_body, RecordCodec};
pub use response_decoder::{DecodeSummary, ResponseDecoder};
