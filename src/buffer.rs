use byteorder::{BigEndian, ByteOrder};

use crate::Error;

/// Standard maximum size of a DNS message carried over UDP.
pub const MAX_PACKET_SIZE: usize = 512;

/// A DNS message held in memory, plus a cursor tracking how far decoding
/// has progressed.
///
/// The content is fixed once loaded. Decoders consume bytes through the
/// cursor or inspect them with the peek accessors; every access is
/// bounds-checked against the bytes actually loaded, so a message that
/// ends mid-field fails instead of yielding trailing zeros.
pub struct PacketBuffer {
    buf: [u8; MAX_PACKET_SIZE],
    len: usize,
    pos: usize,
}

impl PacketBuffer {
    /// Loads a raw message. Inputs longer than [`MAX_PACKET_SIZE`] are
    /// rejected.
    pub fn new(data: &[u8]) -> Result<PacketBuffer, Error> {
        if data.len() > MAX_PACKET_SIZE {
            return Err(Error::PacketTooLarge(data.len()));
        }
        let mut buf = [0u8; MAX_PACKET_SIZE];
        buf[..data.len()].copy_from_slice(data);
        Ok(PacketBuffer {
            buf,
            len: data.len(),
            pos: 0,
        })
    }

    /// Current cursor position.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of bytes loaded.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves the cursor to an absolute position. Never fails; a cursor
    /// left out of range makes the next read fail instead.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Moves the cursor forward by `n` bytes. Same contract as [`seek`].
    ///
    /// [`seek`]: PacketBuffer::seek
    pub fn step(&mut self, n: usize) {
        self.pos += n;
    }

    /// Reads the byte under the cursor and advances past it.
    pub fn read_u8(&mut self) -> Result<u8, Error> {
        if self.pos >= self.len {
            return Err(Error::BufferOverrun);
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Reads two bytes big-endian. All or nothing: the cursor does not
    /// move on failure.
    pub fn read_u16(&mut self) -> Result<u16, Error> {
        let value = BigEndian::read_u16(self.peek_range(self.pos, 2)?);
        self.pos += 2;
        Ok(value)
    }

    /// Reads four bytes big-endian. All or nothing, as [`read_u16`].
    ///
    /// [`read_u16`]: PacketBuffer::read_u16
    pub fn read_u32(&mut self) -> Result<u32, Error> {
        let value = BigEndian::read_u32(self.peek_range(self.pos, 4)?);
        self.pos += 4;
        Ok(value)
    }

    /// Byte at an absolute index, cursor untouched. The bound check is
    /// against the target index, not the cursor.
    pub fn peek_u8(&self, at: usize) -> Result<u8, Error> {
        if at >= self.len {
            return Err(Error::BufferOverrun);
        }
        Ok(self.buf[at])
    }

    /// `len` bytes starting at `start`, cursor untouched. The last loaded
    /// byte is readable: only `start + len` past the end is rejected.
    pub fn peek_range(&self, start: usize, len: usize) -> Result<&[u8], Error> {
        if start + len > self.len {
            return Err(Error::BufferOverrun);
        }
        Ok(&self.buf[start..start + len])
    }
}
