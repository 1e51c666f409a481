//! Session key recovery: decrypt the two independently-ciphered 16-byte
//! halves of the wrapped field under the wrapping-key engine.

use crate::aliases::SessionKey32;
use crate::consts::{BLOCK_SIZE, KEY_LEN, WRAPPED_KEY_LEN};
use crate::crypto::BlockCipherEngine;
use secure_gate::RevealSecretMut;

/// Unwrap the 32-byte wrapped session key field.
///
/// There is no authentication in the format: a wrong wrapping key yields a
/// garbage session key here and is only caught later by the metadata length
/// checks (or not at all — a documented weakness of the scheme).
pub fn unwrap_session_key(
    wrap_engine: &BlockCipherEngine,
    wrapped: [u8; WRAPPED_KEY_LEN],
) -> SessionKey32 {
    let mut key = SessionKey32::new([0u8; KEY_LEN]);
    key.expose_secret_mut().copy_from_slice(&wrapped);

    let (lo, hi) = key.expose_secret_mut().split_at_mut(BLOCK_SIZE);
    wrap_engine.decrypt_block(lo.try_into().expect("split at block size"));
    wrap_engine.decrypt_block(hi.try_into().expect("split at block size"));
    key
}
