//! Encode orchestration: derive/receive the wrapping key, generate and wrap
//! a fresh session key, then stream metadata and content into the container.

use crate::aliases::WrappingKey32;
use crate::crypto::{generate_session_key, BlockCipherEngine};
use crate::encryptor::session::wrap_session_key;
use crate::encryptor::stream::CipherWriter;
use crate::error::RencError;
use crate::header::{write_version, FileInfo};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// Encode `input` into a container written to `output`.
///
/// `info` carries the name and exact byte length to store in the metadata;
/// `input` must supply at least `info.length` bytes. The session key is
/// generated before the first output byte, so a random-source failure
/// leaves `output` untouched.
pub fn encode<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    info: &FileInfo,
    wrapping_key: &WrappingKey32,
) -> Result<(), RencError> {
    let session_key = generate_session_key()?;
    let metadata = info.to_bytes()?;

    write_version(&mut output)?;

    let wrap_engine = BlockCipherEngine::for_wrapping(wrapping_key);
    output.write_all(&wrap_session_key(&wrap_engine, &session_key))?;

    let session_engine = BlockCipherEngine::for_session(&session_key);
    let mut blocks = CipherWriter::new(&session_engine, &mut output);
    blocks.write_blocks(&metadata)?;
    blocks.write_reader(&mut input, info.length)?;

    debug!(name = %info.name, length = info.length, "container encoded");
    Ok(())
}

/// Encode the file at `input_path` into a new container at `output_path`.
///
/// The stored filename is `input_path` exactly as given; the stored length
/// comes from a stat call. File handles are closed on every exit path.
pub fn encode_file(
    input_path: &Path,
    output_path: &Path,
    wrapping_key: &WrappingKey32,
) -> Result<(), RencError> {
    let info = FileInfo::from_path(input_path)?;
    let input = File::open(input_path)?;
    let output = File::create(output_path)?;

    let mut writer = BufWriter::new(output);
    encode(BufReader::new(input), &mut writer, &info, wrapping_key)?;
    writer.flush()?;
    Ok(())
}
