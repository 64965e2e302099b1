use crate::buffer::PacketBuffer;
use crate::Error;

const MAX_JUMPS: usize = 5;

/// Reads a possibly-compressed domain name starting at the buffer's
/// current position, returning it as dot-separated labels.
///
/// Compression pointers are chased through the peek accessors so they
/// never disturb the shared cursor; the cursor ends up just past the
/// name's in-place encoding (two bytes for a pointer, one past the
/// terminating zero otherwise), ready for the field that follows.
/// Pointer chains are capped at five jumps so a cyclic chain in a
/// malformed message cannot loop forever.
///
/// Label bytes are copied out verbatim; embedded dots or control
/// characters are not escaped, and non-UTF-8 bytes are replaced.
pub fn read_name(buffer: &mut PacketBuffer) -> Result<String, Error> {
    let mut name = String::new();
    let mut delim = "";

    let mut pos = buffer.pos();
    let mut jumped = false;
    let mut jumps = 0;

    loop {
        let len = buffer.peek_u8(pos)?;

        if len & 0xC0 == 0xC0 {
            // Only the first pointer fixes the real cursor: it must land
            // right after the name's two-byte in-place encoding, no
            // matter where later jumps lead.
            if !jumped {
                buffer.seek(pos + 2);
            }

            let second = buffer.peek_u8(pos + 1)?;
            pos = usize::from(u16::from(len ^ 0xC0) << 8 | u16::from(second));

            jumped = true;
            jumps += 1;
            if jumps > MAX_JUMPS {
                return Err(Error::CompressionLoopLimit);
            }
        } else {
            pos += 1;
            if len == 0 {
                break;
            }

            name.push_str(delim);
            let label = buffer.peek_range(pos, usize::from(len))?;
            name.push_str(&String::from_utf8_lossy(label));
            delim = ".";
            pos += usize::from(len);
        }
    }

    if !jumped {
        buffer.seek(pos);
    }

    Ok(name)
}
