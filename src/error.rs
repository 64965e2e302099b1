use thiserror::Error;

/// Error decoding a DNS message
///
/// Every variant is terminal for the decode in progress: nothing partial
/// is returned and the caller gets the first failure unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("attempted to read past the end of the packet")]
    BufferOverrun,
    #[error("limit of 5 compression jumps exceeded")]
    CompressionLoopLimit,
    #[error("packet of {0} bytes exceeds the 512 byte maximum")]
    PacketTooLarge(usize),
}
