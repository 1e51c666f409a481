//! # Block Cipher Engine
//!
//! AES-256 over independent 16-byte blocks. There is no IV, no chaining and
//! no padding scheme: each block is transformed in isolation. This is a
//! behavioral contract of the container format — it lacks integrity
//! protection and leaks equal-block structure, and is kept only for
//! byte-for-byte compatibility. Do not substitute a chained or authenticated
//! mode here.

use crate::aliases::{SessionKey32, WrappingKey32};
use crate::consts::{BLOCK_SIZE, KEY_LEN};
use crate::error::RencError;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes256Dec, Aes256Enc, Block as AesBlock};
use secure_gate::RevealSecret;

/// A 32-byte-keyed AES primitive exposing per-block encrypt and decrypt.
///
/// Used twice per operation: once keyed by the wrapping key (session key
/// wrap/unwrap), once keyed by the session key (metadata and content).
#[derive(Debug)]
pub struct BlockCipherEngine {
    enc: Aes256Enc,
    dec: Aes256Dec,
}

impl BlockCipherEngine {
    /// Build an engine from exactly [`KEY_LEN`] key bytes.
    ///
    /// Any other length is a fatal construction error.
    pub fn from_key_bytes(key: &[u8]) -> Result<Self, RencError> {
        if key.len() != KEY_LEN {
            return Err(RencError::Crypto(format!(
                "cipher key must be {KEY_LEN} bytes, got {}",
                key.len()
            )));
        }
        let key: &[u8; KEY_LEN] = key.try_into().expect("length checked above");
        Ok(Self {
            enc: Aes256Enc::new(key.into()),
            dec: Aes256Dec::new(key.into()),
        })
    }

    /// Engine keyed by the wrapping key, for the session-key wrap/unwrap.
    pub fn for_wrapping(key: &WrappingKey32) -> Self {
        Self {
            enc: Aes256Enc::new(key.expose_secret().into()),
            dec: Aes256Dec::new(key.expose_secret().into()),
        }
    }

    /// Engine keyed by the session key, for metadata and content blocks.
    pub fn for_session(key: &SessionKey32) -> Self {
        Self {
            enc: Aes256Enc::new(key.expose_secret().into()),
            dec: Aes256Dec::new(key.expose_secret().into()),
        }
    }

    /// Encrypt one block in place.
    #[inline]
    pub fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        let mut aes_block = AesBlock::from(*block);
        self.enc.encrypt_block(&mut aes_block);
        block.copy_from_slice(aes_block.as_ref());
    }

    /// Decrypt one block in place.
    #[inline]
    pub fn decrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        let mut aes_block = AesBlock::from(*block);
        self.dec.decrypt_block(&mut aes_block);
        block.copy_from_slice(aes_block.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_then_decrypt_is_identity() {
        let engine = BlockCipherEngine::from_key_bytes(&[7u8; 32]).unwrap();
        let plain = *b"sixteen byte blk";
        let mut block = plain;
        engine.encrypt_block(&mut block);
        assert_ne!(block, plain);
        engine.decrypt_block(&mut block);
        assert_eq!(block, plain);
    }

    #[test]
    fn blocks_are_independent() {
        // Same plaintext block twice must yield the same ciphertext twice —
        // the format's (weak) unchained contract.
        let engine = BlockCipherEngine::from_key_bytes(&[1u8; 32]).unwrap();
        let mut a = [0xabu8; 16];
        let mut b = [0xabu8; 16];
        engine.encrypt_block(&mut a);
        engine.encrypt_block(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_wrong_key_length() {
        for len in [0usize, 16, 31, 33, 64] {
            let err = BlockCipherEngine::from_key_bytes(&vec![0u8; len]).unwrap_err();
            assert!(matches!(err, RencError::Crypto(_)), "len {len}");
        }
    }
}
