//! Variable-length quantities used by the packed transaction format
//!
//! Groups of 7 bits, most significant group first, high bit set on every byte
//! except the last. Signed values move the sign into the lowest bit.

/// Longest encoding of a 64-bit value
pub const MAX_LEN_64: usize = 10;

/// Encode an unsigned value, returning the bytes written
///
/// `buf` must hold at least [`MAX_LEN_64`] bytes.
pub fn put_uint(buf: &mut [u8], mut value: u64) -> usize {
    let mut tmp = [0u8; MAX_LEN_64];
    let mut n = MAX_LEN_64 - 1;
    tmp[n] = (value & 0x7f) as u8;
    value >>= 7;
    while value > 0 {
        n -= 1;
        tmp[n] = 0x80 | (value & 0x7f) as u8;
        value >>= 7;
    }
    let len = MAX_LEN_64 - n;
    buf[..len].copy_from_slice(&tmp[n..]);
    len
}

/// Encode a signed value, returning the bytes written
pub fn put_int(buf: &mut [u8], value: i64) -> usize {
    let mut ux = (value as u64) << 1;
    if value < 0 {
        ux = !ux;
    }
    put_uint(buf, ux)
}

/// Decode an unsigned value, returning it with the bytes consumed
pub fn read_uint(buf: &[u8]) -> Option<(u64, usize)> {
    let mut value: u64 = 0;
    for (i, &b) in buf.iter().take(MAX_LEN_64).enumerate() {
        value = value.checked_shl(7)? | u64::from(b & 0x7f);
        if b & 0x80 == 0 {
            return Some((value, i + 1));
        }
    }
    None
}

/// Decode a signed value, returning it with the bytes consumed
pub fn read_int(buf: &[u8]) -> Option<(i64, usize)> {
    let (ux, len) = read_uint(buf)?;
    let mut value = (ux >> 1) as i64;
    if ux & 1 != 0 {
        value = !value;
    }
    Some((value, len))
}
