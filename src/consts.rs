//! # Constants
//!
//! Fixed widths and constants of the container format. All layout arithmetic
//! in the crate goes through these so the format stays independent of the
//! host architecture.

/// Container format version. Written as a little-endian `i32` at offset 0
/// and checked at decode entry; any other value is a format error.
pub const FORMAT_VERSION: i32 = 0;

/// AES block size. Metadata and content are ciphered in independent units
/// of this many bytes, with no chaining between them.
pub const BLOCK_SIZE: usize = 16;

/// Length of the wrapping key and the session key.
pub const KEY_LEN: usize = 32;

/// Width of the version field at the start of the container.
pub const VERSION_LEN: usize = 4;

/// Length of the wrapped session key field (two independently-ciphered
/// 16-byte halves).
pub const WRAPPED_KEY_LEN: usize = 32;

/// Width of the `name_len` field inside the metadata plaintext (`i32` LE).
pub const NAME_LEN_FIELD: usize = 4;

/// Width of the `file_len` field inside the metadata plaintext (`i64` LE).
pub const FILE_LEN_FIELD: usize = 8;

/// Chunk size used when streaming the keyfile through the KDF.
pub const KEYFILE_CHUNK_SIZE: usize = 1024;

/// Total metadata plaintext length for a filename of `name_len` bytes.
#[inline]
pub const fn metadata_len(name_len: usize) -> usize {
    NAME_LEN_FIELD + name_len + FILE_LEN_FIELD
}
