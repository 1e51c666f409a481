//! tests/common.rs
//! Shared helpers for the integration test suites.

use renc::aliases::{PasswordString, WrappingKey32};
use renc::{derive_wrapping_key_from_reader, encode, FileInfo};
use std::io::Cursor;

/// Standard password/keyfile pair used across suites.
#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "pw";
#[allow(dead_code)]
pub const TEST_KEYFILE: &[u8] = b"seed";

/// Derive a wrapping key from in-memory keyfile content.
#[allow(dead_code)]
pub fn key_from(password: &str, keyfile: &[u8]) -> WrappingKey32 {
    let password = PasswordString::new(password.to_string());
    derive_wrapping_key_from_reader(&password, Cursor::new(keyfile.to_vec()))
        .expect("in-memory derivation cannot fail")
}

/// Encode `content` under `name` into an in-memory container.
#[allow(dead_code)]
pub fn mem_encode(name: &str, content: &[u8], key: &WrappingKey32) -> Vec<u8> {
    let info = FileInfo {
        name: name.to_string(),
        length: content.len() as u64,
    };
    let mut container = Vec::new();
    encode(Cursor::new(content.to_vec()), &mut container, &info, key).expect("encode");
    container
}
