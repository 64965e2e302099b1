use crate::buffer::PacketBuffer;
use crate::enums::QueryType;
use crate::name::read_name;
use crate::Error;

/// One entry from the question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: QueryType,
    /// Conventionally 1 (IN).
    pub qclass: u16,
}

impl Question {
    pub fn read(buffer: &mut PacketBuffer) -> Result<Question, Error> {
        let name = read_name(buffer)?;
        let qtype = QueryType::from_code(buffer.read_u16()?);
        let qclass = buffer.read_u16()?;

        Ok(Question {
            name,
            qtype,
            qclass,
        })
    }
}
