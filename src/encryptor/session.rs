//! Session key wrapping.
//!
//! The two 16-byte halves of the session key are each encrypted in
//! isolation under the wrapping key and stored right after the version
//! field. The wrapping key itself never touches metadata or content.

use crate::aliases::SessionKey32;
use crate::consts::{BLOCK_SIZE, WRAPPED_KEY_LEN};
use crate::crypto::BlockCipherEngine;
use secure_gate::RevealSecret;

/// Encrypt the session key under the wrapping-key engine, producing the
/// 32-byte wrapped field of the container.
pub fn wrap_session_key(
    wrap_engine: &BlockCipherEngine,
    session_key: &SessionKey32,
) -> [u8; WRAPPED_KEY_LEN] {
    let mut wrapped = [0u8; WRAPPED_KEY_LEN];
    wrapped.copy_from_slice(session_key.expose_secret());

    let (lo, hi) = wrapped.split_at_mut(BLOCK_SIZE);
    wrap_engine.encrypt_block(lo.try_into().expect("split at block size"));
    wrap_engine.encrypt_block(hi.try_into().expect("split at block size"));
    wrapped
}
