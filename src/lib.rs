//! Decoder for binary DNS messages.
//!
//! A message of at most 512 bytes is loaded into a [`PacketBuffer`] and
//! decoded front to back: the fixed header, then questions and resource
//! records, with compressed names resolved by chasing pointers inside the
//! same buffer. [`Packet::parse`] drives a whole message; the section
//! decoders can also be run directly against a buffer.
//!
//! Obtaining the raw bytes (socket or file I/O) and anything resembling
//! resolver logic are left to the caller, and there is no encoder.
//!
//! ```
//! use dns_wire::{Packet, RData};
//!
//! let raw = b"\x1a\x2b\x81\x80\x00\x01\x00\x01\x00\x00\x00\x00\
//!             \x03www\x07example\x03com\x00\x00\x01\x00\x01\
//!             \xc0\x0c\x00\x01\x00\x01\x00\x00\x01\x2c\x00\x04\x5d\xb8\xd8\x22";
//!
//! let packet = Packet::parse(raw).unwrap();
//! assert_eq!(packet.questions[0].name, "www.example.com");
//! assert_eq!(
//!     packet.answers[0].data,
//!     RData::A("93.184.216.34".parse().unwrap())
//! );
//! ```

mod buffer;
mod enums;
mod error;
mod header;
mod name;
mod packet;
mod question;
mod record;

pub use buffer::{PacketBuffer, MAX_PACKET_SIZE};
pub use enums::{QueryType, ResponseCode};
pub use error::Error;
pub use header::Header;
pub use name::read_name;
pub use packet::Packet;
pub use question::Question;
pub use record::{RData, ResourceRecord};
