use crate::buffer::PacketBuffer;
use crate::enums::ResponseCode;
use crate::Error;

/// The fixed twelve-byte header leading every DNS message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Transaction id matching a response to its query.
    pub id: u16,

    pub recursion_desired: bool,
    pub truncated: bool,
    pub authoritative: bool,
    /// Four-bit operation code. Not validated beyond extraction.
    pub opcode: u8,
    /// Set on responses, clear on queries.
    pub response: bool,

    pub rescode: ResponseCode,
    pub checking_disabled: bool,
    pub authed_data: bool,
    /// Reserved (Z) bit.
    pub z: bool,
    pub recursion_available: bool,

    pub questions: u16,
    pub answers: u16,
    pub authoritative_entries: u16,
    pub resource_entries: u16,
}

impl Header {
    /// Decodes the header from the front of the buffer. Errors from the
    /// underlying reads propagate unchanged.
    pub fn read(buffer: &mut PacketBuffer) -> Result<Header, Error> {
        let id = buffer.read_u16()?;
        let flags = buffer.read_u16()?;

        Ok(Header {
            id,

            recursion_desired: (flags >> 8) & 1 > 0,
            truncated: (flags >> 9) & 1 > 0,
            authoritative: (flags >> 10) & 1 > 0,
            opcode: ((flags >> 11) & 0x0F) as u8,
            response: (flags >> 15) & 1 > 0,

            rescode: ResponseCode::from_code((flags & 0x0F) as u8),
            checking_disabled: (flags >> 4) & 1 > 0,
            authed_data: (flags >> 5) & 1 > 0,
            z: (flags >> 6) & 1 > 0,
            recursion_available: (flags >> 7) & 1 > 0,

            questions: buffer.read_u16()?,
            answers: buffer.read_u16()?,
            authoritative_entries: buffer.read_u16()?,
            resource_entries: buffer.read_u16()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typical_response_flags() {
        let raw = b"\x86\x2a\x81\x80\x00\x01\x00\x02\x00\x00\x00\x01";
        let mut buffer = PacketBuffer::new(raw).unwrap();
        let header = Header::read(&mut buffer).unwrap();

        assert_eq!(header.id, 0x862a);
        assert!(header.response);
        assert!(header.recursion_desired);
        assert!(header.recursion_available);
        assert!(!header.authoritative);
        assert!(!header.truncated);
        assert!(!header.z);
        assert_eq!(header.opcode, 0);
        assert_eq!(header.rescode, ResponseCode::NoError);

        assert_eq!(header.questions, 1);
        assert_eq!(header.answers, 2);
        assert_eq!(header.authoritative_entries, 0);
        assert_eq!(header.resource_entries, 1);
        assert_eq!(buffer.pos(), 12);
    }

    #[test]
    fn rescode_and_secondary_flags() {
        // NXDOMAIN, AD and CD set, opcode 2 (status).
        let raw = b"\x00\x01\x91\xb3\x00\x00\x00\x00\x00\x00\x00\x00";
        let mut buffer = PacketBuffer::new(raw).unwrap();
        let header = Header::read(&mut buffer).unwrap();

        assert!(header.response);
        assert_eq!(header.opcode, 2);
        assert_eq!(header.rescode, ResponseCode::NxDomain);
        assert!(header.authed_data);
        assert!(header.checking_disabled);
        assert!(header.recursion_available);
    }

    #[test]
    fn unknown_rescode_is_preserved() {
        let raw = b"\x00\x01\x80\x0b\x00\x00\x00\x00\x00\x00\x00\x00";
        let mut buffer = PacketBuffer::new(raw).unwrap();
        let header = Header::read(&mut buffer).unwrap();
        assert_eq!(header.rescode, ResponseCode::Unknown(11));
    }

    #[test]
    fn short_header_fails() {
        let mut buffer = PacketBuffer::new(b"\x86\x2a\x81\x80\x00\x01").unwrap();
        assert_eq!(Header::read(&mut buffer), Err(Error::BufferOverrun));
    }
}
