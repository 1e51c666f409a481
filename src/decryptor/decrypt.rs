//! Decode orchestration: version check, session key recovery, metadata
//! parse, then streaming content decryption.
//!
//! Decoding is split in two phases so the caller can inspect the recovered
//! metadata before any output is created: [`begin_decode`] consumes the
//! header and metadata, and [`Decoder::copy_content`] streams the content to
//! a sink of the caller's choosing. [`decode_file`] wires the two together
//! the way the CLI uses them, creating the output file under the stored
//! name.

use crate::aliases::WrappingKey32;
use crate::crypto::BlockCipherEngine;
use crate::decryptor::read::read_exact_span;
use crate::decryptor::session::unwrap_session_key;
use crate::decryptor::stream::BlockReader;
use crate::error::RencError;
use crate::header::{read_version, FileInfo};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A container whose header and metadata have been read and validated,
/// positioned at the start of the encrypted content.
pub struct Decoder<R: Read> {
    engine: BlockCipherEngine,
    reader: R,
    info: FileInfo,
}

impl<R: Read> Decoder<R> {
    /// The recovered metadata: stored filename and true content length.
    pub fn info(&self) -> &FileInfo {
        &self.info
    }

    /// Stream-decrypt the content into `output`. Consumes the decoder;
    /// exactly `info().length` real bytes are written.
    pub fn copy_content<W: Write>(mut self, output: &mut W) -> Result<(), RencError> {
        let length = self.info.length;
        let mut blocks = BlockReader::new(&self.engine, &mut self.reader);
        blocks.copy_content(output, length)
    }
}

/// Read and validate the container header and metadata from `input`.
///
/// Checks the version, unwraps the session key, and accumulates the
/// metadata. Fails with a format error on any version or length mismatch;
/// no output is created by this phase.
pub fn begin_decode<R: Read>(
    mut input: R,
    wrapping_key: &WrappingKey32,
) -> Result<Decoder<R>, RencError> {
    read_version(&mut input)?;

    let wrapped = read_exact_span(&mut input)?;
    let wrap_engine = BlockCipherEngine::for_wrapping(wrapping_key);
    let session_key = unwrap_session_key(&wrap_engine, wrapped);

    let engine = BlockCipherEngine::for_session(&session_key);
    let info = BlockReader::new(&engine, &mut input).read_file_info()?;
    debug!(name = %info.name, length = info.length, "container metadata recovered");

    Ok(Decoder {
        engine,
        reader: input,
        info,
    })
}

/// Decode the container at `input_path`, recreating the original file under
/// its stored name.
///
/// The output path is whatever name was stored at encode time (possibly a
/// full path); the create call truncates or fails per platform rules.
/// Returns the path that was written. Handles are closed on every exit
/// path.
pub fn decode_file(input_path: &Path, wrapping_key: &WrappingKey32) -> Result<PathBuf, RencError> {
    let input = File::open(input_path)?;
    let decoder = begin_decode(BufReader::new(input), wrapping_key)?;

    let output_path = PathBuf::from(&decoder.info().name);
    let output = File::create(&output_path)?;
    let mut writer = BufWriter::new(output);
    decoder.copy_content(&mut writer)?;
    writer.flush()?;
    Ok(output_path)
}
