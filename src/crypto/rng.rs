//! Session key generation from the operating system's secure random source.

use crate::aliases::SessionKey32;
use crate::consts::KEY_LEN;
use crate::error::RencError;
use rand::rngs::OsRng;
use rand::TryRngCore;

/// Generate a fresh 32-byte session key.
///
/// Fatal if the OS random source cannot supply all [`KEY_LEN`] bytes; a
/// session key must never be derived from anything weaker.
pub fn generate_session_key() -> Result<SessionKey32, RencError> {
    let mut bytes = [0u8; KEY_LEN];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| RencError::Crypto(format!("session key generation failed: {e}")))?;
    Ok(SessionKey32::new(bytes))
}
