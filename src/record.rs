use std::net::{Ipv4Addr, Ipv6Addr};

use byteorder::{BigEndian, ByteOrder};
use log::warn;

use crate::buffer::PacketBuffer;
use crate::enums::QueryType;
use crate::name::read_name;
use crate::Error;

/// The decoded, type-specific payload of a resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME { host: String },
    MX { priority: u16, host: String },
    /// Types this crate does not decode. The declared rdata is skipped
    /// so the records after it still line up.
    Unknown,
}

/// A single record from the answer, authority or additional section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub qtype: QueryType,
    pub class: u16,
    pub ttl: u32,
    /// Declared rdata length in bytes, kept as read off the wire.
    pub data_len: u16,
    pub data: RData,
}

impl ResourceRecord {
    /// Decodes one record: the common name/type/class/ttl/length prefix,
    /// then a payload chosen by the record type.
    pub fn read(buffer: &mut PacketBuffer) -> Result<ResourceRecord, Error> {
        let name = read_name(buffer)?;
        let qtype = QueryType::from_code(buffer.read_u16()?);
        let class = buffer.read_u16()?;
        let ttl = buffer.read_u32()?;
        let data_len = buffer.read_u16()?;

        let data = match qtype {
            QueryType::A => {
                let raw = buffer.read_u32()?;
                RData::A(Ipv4Addr::from(raw))
            }
            QueryType::AAAA => {
                let raw = buffer.peek_range(buffer.pos(), 16)?;
                let addr = Ipv6Addr::new(
                    BigEndian::read_u16(&raw[0..2]),
                    BigEndian::read_u16(&raw[2..4]),
                    BigEndian::read_u16(&raw[4..6]),
                    BigEndian::read_u16(&raw[6..8]),
                    BigEndian::read_u16(&raw[8..10]),
                    BigEndian::read_u16(&raw[10..12]),
                    BigEndian::read_u16(&raw[12..14]),
                    BigEndian::read_u16(&raw[14..16]),
                );
                buffer.step(16);
                RData::AAAA(addr)
            }
            QueryType::CNAME => RData::CNAME {
                host: read_name(buffer)?,
            },
            QueryType::MX => {
                let priority = buffer.read_u16()?;
                let host = read_name(buffer)?;
                RData::MX { priority, host }
            }
            qtype => {
                warn!(
                    "skipping {} bytes of rdata for unhandled record type {:?}",
                    data_len, qtype
                );
                buffer.step(usize::from(data_len));
                RData::Unknown
            }
        };

        Ok(ResourceRecord {
            name,
            qtype,
            class,
            ttl,
            data_len,
            data,
        })
    }
}
