//! Low-level container reads: exact-size spans off the stream.

use crate::error::RencError;
use std::io::Read;

/// Read exactly `N` bytes into a stack-allocated `[u8; N]`.
#[inline]
pub fn read_exact_span<R: Read, const N: usize>(reader: &mut R) -> Result<[u8; N], RencError> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(RencError::Io)?;
    Ok(buf)
}
