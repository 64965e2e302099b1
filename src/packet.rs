use log::{debug, trace};

use crate::buffer::PacketBuffer;
use crate::header::Header;
use crate::question::Question;
use crate::record::ResourceRecord;
use crate::Error;

/// A fully decoded DNS message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub nameservers: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl Packet {
    /// Decodes a whole message front to back: the header, then each
    /// section in wire order with its count taken from the header. The
    /// first failing read aborts the parse.
    pub fn parse(data: &[u8]) -> Result<Packet, Error> {
        let mut buffer = PacketBuffer::new(data)?;

        let header = Header::read(&mut buffer)?;
        trace!(
            "message {:#06x}: {} questions, {}/{}/{} records",
            header.id,
            header.questions,
            header.answers,
            header.authoritative_entries,
            header.resource_entries
        );

        let mut questions = Vec::with_capacity(usize::from(header.questions));
        for _ in 0..header.questions {
            questions.push(Question::read(&mut buffer)?);
        }

        let mut answers = Vec::with_capacity(usize::from(header.answers));
        for _ in 0..header.answers {
            answers.push(ResourceRecord::read(&mut buffer)?);
        }

        let mut nameservers = Vec::with_capacity(usize::from(header.authoritative_entries));
        for _ in 0..header.authoritative_entries {
            nameservers.push(ResourceRecord::read(&mut buffer)?);
        }

        let mut additional = Vec::with_capacity(usize::from(header.resource_entries));
        for _ in 0..header.resource_entries {
            additional.push(ResourceRecord::read(&mut buffer)?);
        }

        debug!(
            "decoded message {:#06x} from {} of {} bytes",
            header.id,
            buffer.pos(),
            buffer.len()
        );

        Ok(Packet {
            header,
            questions,
            answers,
            nameservers,
            additional,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::QueryType;
    use crate::record::RData;
    use std::net::Ipv4Addr;

    #[test]
    fn response_with_compressed_answer() {
        let raw = b"\x1a\x2b\x81\x80\x00\x01\x00\x01\x00\x00\x00\x00\
                    \x03www\x07example\x03com\x00\x00\x01\x00\x01\
                    \xc0\x0c\x00\x01\x00\x01\x00\x00\x01\x2c\x00\x04\x5d\xb8\xd8\x22";

        let packet = Packet::parse(raw).unwrap();

        assert_eq!(packet.header.id, 0x1a2b);
        assert!(packet.header.response);
        assert_eq!(packet.questions.len(), 1);
        assert_eq!(packet.questions[0].name, "www.example.com");
        assert_eq!(packet.questions[0].qtype, QueryType::A);

        assert_eq!(packet.answers.len(), 1);
        assert_eq!(packet.answers[0].name, "www.example.com");
        assert_eq!(packet.answers[0].ttl, 300);
        assert_eq!(
            packet.answers[0].data,
            RData::A(Ipv4Addr::new(93, 184, 216, 34))
        );
        assert!(packet.nameservers.is_empty());
        assert!(packet.additional.is_empty());
    }

    #[test]
    fn missing_question_fails() {
        // Header promises two questions; only one is encoded.
        let raw = b"\x1a\x2b\x01\x00\x00\x02\x00\x00\x00\x00\x00\x00\
                    \x03www\x07example\x03com\x00\x00\x01\x00\x01";

        assert_eq!(Packet::parse(raw), Err(Error::BufferOverrun));
    }

    #[test]
    fn unknown_answer_type_keeps_later_records_aligned() {
        // First answer is a TXT record (type 16, not decoded); the A
        // record after it must still parse from the right offset.
        let raw = b"\x1a\x2b\x81\x80\x00\x01\x00\x02\x00\x00\x00\x00\
                    \x03www\x07example\x03com\x00\x00\x01\x00\x01\
                    \xc0\x0c\x00\x10\x00\x01\x00\x00\x00\x3c\x00\x05hello\
                    \xc0\x0c\x00\x01\x00\x01\x00\x00\x01\x2c\x00\x04\x5d\xb8\xd8\x22";

        let packet = Packet::parse(raw).unwrap();

        assert_eq!(packet.answers.len(), 2);
        assert_eq!(packet.answers[0].qtype, QueryType::Unknown(16));
        assert_eq!(packet.answers[0].data, RData::Unknown);
        assert_eq!(
            packet.answers[1].data,
            RData::A(Ipv4Addr::new(93, 184, 216, 34))
        );
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(Packet::parse(b""), Err(Error::BufferOverrun));
    }
}
