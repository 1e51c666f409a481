// src/lib.rs

//! Single-file encryption with a two-tier key scheme: a wrapping key derived
//! from a password and a keyfile protects a random per-file session key,
//! which in turn encrypts the file's name, length, and content into one
//! self-contained binary container.
//!
//! ## Container layout (little-endian throughout)
//!
//! | Offset | Size            | Field |
//! |--------|-----------------|-------|
//! | 0      | 4               | version (`i32`, currently 0) |
//! | 4      | 32              | wrapped session key (two independent 16-byte halves) |
//! | 36     | multiple of 16  | encrypted metadata (`name_len:4`, name, `file_len:8`, slack) |
//! | after  | multiple of 16  | encrypted content; true length given by `file_len` |
//!
//! ## Security caveats
//!
//! The format is preserved byte-for-byte from its original design and keeps
//! that design's weaknesses: blocks are ciphered independently with no
//! chaining and no authentication, so equal plaintext blocks produce equal
//! ciphertext and tampering is not detected beyond the version and length
//! checks. Treat it as an obfuscation-grade container, not a modern AEAD.

pub mod aliases;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod header;
pub mod password;

// High-level API — this is what most users import
pub use decryptor::{begin_decode, decode_file, Decoder};
pub use encryptor::{encode, encode_file};
pub use error::RencError;

pub use crypto::{derive_wrapping_key, derive_wrapping_key_from_reader};
pub use header::FileInfo;
pub use password::read_password_visible;
