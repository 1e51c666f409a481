//! Block-oriented streaming encryption.
//!
//! [`CipherWriter`] owns a single 16-byte working buffer that persists across
//! the whole metadata-then-content stream and is encrypted in place. A final
//! partial block therefore carries, past its real bytes, leftover ciphertext
//! of the previous block — the format's "slack" bytes. They are harmless
//! (decode trusts the stored lengths, never the ciphertext length) but they
//! are part of the on-disk byte contract, so the buffer is deliberately not
//! zeroed between blocks.

use crate::aliases::Block16;
use crate::consts::BLOCK_SIZE;
use crate::crypto::BlockCipherEngine;
use crate::error::RencError;
use std::io::{ErrorKind, Read, Write};
use secure_gate::{RevealSecret, RevealSecretMut};

/// Streaming block encryptor for metadata and content.
pub struct CipherWriter<'a, W: Write> {
    engine: &'a BlockCipherEngine,
    writer: W,
    // Working buffer, reused for every block. Carries slack between calls.
    block: Block16,
}

impl<'a, W: Write> CipherWriter<'a, W> {
    pub fn new(engine: &'a BlockCipherEngine, writer: W) -> Self {
        Self {
            engine,
            writer,
            block: Block16::new([0u8; BLOCK_SIZE]),
        }
    }

    /// Encrypt and emit the working buffer.
    fn emit(&mut self) -> Result<(), RencError> {
        self.engine.encrypt_block(self.block.expose_secret_mut());
        self.writer.write_all(self.block.expose_secret())?;
        Ok(())
    }

    /// Encrypt `data` block by block, writing each ciphertext block
    /// immediately. A trailing partial chunk overwrites only the front of
    /// the working buffer, leaving slack in the tail.
    pub fn write_blocks(&mut self, data: &[u8]) -> Result<(), RencError> {
        for chunk in data.chunks(BLOCK_SIZE) {
            self.block.expose_secret_mut()[..chunk.len()].copy_from_slice(chunk);
            self.emit()?;
        }
        Ok(())
    }

    /// Encrypt `declared_len` bytes from `source` in 16-byte blocks.
    ///
    /// Exactly `ceil(declared_len / 16)` blocks are emitted. If the source
    /// runs out before the declared length is exhausted, the stream is
    /// inconsistent with the stat that produced `declared_len` and the
    /// operation aborts with an I/O error.
    pub fn write_reader<R: Read>(
        &mut self,
        source: &mut R,
        declared_len: u64,
    ) -> Result<(), RencError> {
        let mut remaining = declared_len;
        while remaining > 0 {
            let want = if remaining >= BLOCK_SIZE as u64 {
                BLOCK_SIZE
            } else {
                remaining as usize
            };
            let n = fill_front(source, self.block.expose_secret_mut(), want)?;
            if n < want {
                return Err(RencError::Io(std::io::Error::new(
                    ErrorKind::UnexpectedEof,
                    "input file shorter than its reported length",
                )));
            }
            self.emit()?;
            remaining = remaining.saturating_sub(BLOCK_SIZE as u64);
        }
        Ok(())
    }
}

/// Read up to `want` bytes into the front of `block`, stopping early only at
/// end-of-file. Bytes past the returned count are left untouched.
fn fill_front<R: Read>(
    source: &mut R,
    block: &mut [u8; BLOCK_SIZE],
    want: usize,
) -> Result<usize, RencError> {
    let mut filled = 0;
    while filled < want {
        let n = source.read(&mut block[filled..want])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
