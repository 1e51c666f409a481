//! # Key Derivation
//!
//! Turns a password and a keyfile's byte content into the 32-byte wrapping
//! key: HMAC-SHA512 keyed by the password, streamed over the keyfile, then
//! two folding passes over the 64-byte digest.
//!
//! The first fold ("hex fold") is intentionally narrow: it maps ASCII
//! `'0'..='9'` to their digit value and lowercase `'a'..='f'` to `0..=5`,
//! and leaves every other byte — including uppercase hex letters — alone.
//! That asymmetry is part of the format; completing it would change every
//! derived key.

use crate::aliases::{Digest64, HmacSha512, PasswordString, WrappingKey32};
use crate::consts::{KEY_LEN, KEYFILE_CHUNK_SIZE};
use crate::error::RencError;
use hmac::Mac;
use secure_gate::{RevealSecret, RevealSecretMut};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Derive the wrapping key from a password and the file at `keyfile`.
///
/// Deterministic: identical password and keyfile content always produce the
/// same key. An empty keyfile path is fatal before any hashing occurs;
/// open/read failures surface as [`RencError::Io`].
pub fn derive_wrapping_key(
    password: &PasswordString,
    keyfile: &Path,
) -> Result<WrappingKey32, RencError> {
    if keyfile.as_os_str().is_empty() {
        return Err(RencError::Crypto("keyfile path is empty".into()));
    }
    let file = File::open(keyfile)?;
    derive_wrapping_key_from_reader(password, file)
}

/// Derive the wrapping key from a password and any keyfile byte stream.
///
/// The stream is consumed to end-of-file in [`KEYFILE_CHUNK_SIZE`] chunks;
/// there is no maximum size.
pub fn derive_wrapping_key_from_reader<R: Read>(
    password: &PasswordString,
    mut keyfile: R,
) -> Result<WrappingKey32, RencError> {
    let mut mac = <HmacSha512 as Mac>::new_from_slice(password.expose_secret().as_bytes())
        .expect("HMAC-SHA512 accepts keys of any length");

    let mut chunk = [0u8; KEYFILE_CHUNK_SIZE];
    loop {
        let n = keyfile.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        mac.update(&chunk[..n]);
    }

    let mut digest = Digest64::new([0u8; 64]);
    digest
        .expose_secret_mut()
        .copy_from_slice(&mac.finalize().into_bytes());

    Ok(fold_digest(&mut digest))
}

/// Fold a 64-byte digest down to the 32-byte wrapping key.
///
/// Pass 1 is the narrow hex fold described in the module docs; pass 2 XORs
/// the upper half into the lower half. The first 32 bytes are the key.
pub(crate) fn fold_digest(digest: &mut Digest64) -> WrappingKey32 {
    let bytes = digest.expose_secret_mut();

    for b in bytes.iter_mut() {
        if b.is_ascii_digit() {
            *b -= b'0';
        } else if (b'a'..=b'f').contains(b) {
            *b -= b'a';
        }
    }

    for i in 0..KEY_LEN {
        bytes[i] ^= bytes[i + KEY_LEN];
    }

    let mut key = WrappingKey32::new([0u8; KEY_LEN]);
    key.expose_secret_mut().copy_from_slice(&bytes[..KEY_LEN]);
    key
}
