//! Block-oriented streaming decryption: metadata accumulation and the
//! content loop.
//!
//! Both loops are governed by stored plaintext lengths, never by the
//! ciphertext length. The metadata loop stops once `4 + name_len + 8`
//! decrypted bytes have been accumulated; the content loop tracks the
//! declared file length and writes only that many real bytes, discarding
//! slack in the final block.

use crate::consts::{metadata_len, BLOCK_SIZE};
use crate::crypto::BlockCipherEngine;
use crate::error::RencError;
use crate::header::{read_name_len, FileInfo};
use std::io::{Read, Write};

/// Streaming block decryptor over a container's ciphertext section.
pub struct BlockReader<'a, R: Read> {
    engine: &'a BlockCipherEngine,
    reader: R,
}

impl<'a, R: Read> BlockReader<'a, R> {
    pub fn new(engine: &'a BlockCipherEngine, reader: R) -> Self {
        Self { engine, reader }
    }

    /// Read and decrypt the next 16-byte block.
    ///
    /// Returns `Ok(None)` at a clean end of stream. A partial trailing block
    /// means the container is misaligned and is a format error.
    pub fn next_block(&mut self) -> Result<Option<[u8; BLOCK_SIZE]>, RencError> {
        let mut block = [0u8; BLOCK_SIZE];
        let mut filled = 0;
        while filled < BLOCK_SIZE {
            let n = self.reader.read(&mut block[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        match filled {
            0 => Ok(None),
            BLOCK_SIZE => {
                self.engine.decrypt_block(&mut block);
                Ok(Some(block))
            }
            _ => Err(RencError::Format(
                "ciphertext not a multiple of the block size; may not be an encrypted file".into(),
            )),
        }
    }

    /// Decrypt blocks until the full metadata plaintext has accumulated,
    /// then parse it.
    pub fn read_file_info(&mut self) -> Result<FileInfo, RencError> {
        let first = self.next_block()?.ok_or_else(|| {
            RencError::Format("missing metadata; may not be an encrypted file".into())
        })?;
        let name_len = read_name_len(&first)?;
        let total = metadata_len(name_len);

        let mut plaintext = Vec::with_capacity(total.min(4096));
        plaintext.extend_from_slice(&first);
        while plaintext.len() < total {
            let block = self.next_block()?.ok_or_else(|| {
                RencError::Format("truncated metadata; may not be an encrypted file".into())
            })?;
            plaintext.extend_from_slice(&block);
        }

        FileInfo::parse(&plaintext, name_len)
    }

    /// Decrypt content blocks into `output` until `length` real bytes have
    /// been written, then stop consuming the stream.
    ///
    /// The final block's tail past `length` is slack and is discarded. If
    /// the stream ends with more than one block still outstanding, the
    /// container is truncated and the operation fails; an end of stream
    /// within the last block is passed through silently — a known accepted
    /// defect of the original format, kept for compatibility.
    pub fn copy_content<W: Write>(&mut self, output: &mut W, length: u64) -> Result<(), RencError> {
        let mut remaining = length;
        while remaining > 0 {
            match self.next_block()? {
                Some(block) => {
                    if remaining > BLOCK_SIZE as u64 {
                        output.write_all(&block)?;
                        remaining -= BLOCK_SIZE as u64;
                    } else {
                        output.write_all(&block[..remaining as usize])?;
                        remaining = 0;
                    }
                }
                None => {
                    if remaining > BLOCK_SIZE as u64 {
                        return Err(RencError::Format(
                            "content shorter than declared length; may not be an encrypted file"
                                .into(),
                        ));
                    }
                    break;
                }
            }
        }
        Ok(())
    }
}
