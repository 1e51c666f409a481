//! # Container Header and Metadata
//!
//! The container opens with a 4-byte little-endian signed version (currently
//! [`FORMAT_VERSION`]), followed by the 32-byte wrapped session key. The
//! encrypted metadata that follows decrypts to:
//!
//! ```text
//! name_len: i32 LE || name: name_len bytes || file_len: i64 LE
//! ```
//!
//! Metadata ciphertext is rounded up to the next 16-byte boundary; the bytes
//! past the true metadata are slack and carry no information. All widths are
//! fixed regardless of host architecture.

use crate::consts::{metadata_len, FILE_LEN_FIELD, FORMAT_VERSION, NAME_LEN_FIELD, VERSION_LEN};
use crate::error::RencError;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Plaintext form of the container metadata: the original file's name (as
/// given on encode, so possibly a full path) and its exact byte length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub length: u64,
}

impl FileInfo {
    /// Build metadata for the file at `path`, using the path string as the
    /// stored name and a stat call for the length.
    pub fn from_path(path: &Path) -> Result<Self, RencError> {
        let name = path
            .to_str()
            .ok_or_else(|| RencError::Format("input path is not valid UTF-8".into()))?
            .to_string();
        let length = fs::metadata(path)?.len();
        Ok(Self { name, length })
    }

    /// Serialize to the metadata plaintext layout.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RencError> {
        let name_len = i32::try_from(self.name.len())
            .map_err(|_| RencError::Format("filename longer than i32::MAX bytes".into()))?;
        let file_len = i64::try_from(self.length)
            .map_err(|_| RencError::Format("file longer than i64::MAX bytes".into()))?;

        let mut buf = Vec::with_capacity(metadata_len(self.name.len()));
        buf.extend_from_slice(&name_len.to_le_bytes());
        buf.extend_from_slice(self.name.as_bytes());
        buf.extend_from_slice(&file_len.to_le_bytes());
        Ok(buf)
    }

    /// Parse accumulated metadata plaintext. `buf` must hold at least
    /// `4 + name_len + 8` bytes; anything beyond that is slack and ignored.
    pub fn parse(buf: &[u8], name_len: usize) -> Result<Self, RencError> {
        let total = metadata_len(name_len);
        if buf.len() < total {
            return Err(RencError::Format(
                "metadata shorter than declared; may not be an encrypted file".into(),
            ));
        }

        let name = std::str::from_utf8(&buf[NAME_LEN_FIELD..NAME_LEN_FIELD + name_len])
            .map_err(|_| RencError::Format("stored filename is not valid UTF-8".into()))?
            .to_string();

        let mut len_bytes = [0u8; FILE_LEN_FIELD];
        len_bytes.copy_from_slice(&buf[NAME_LEN_FIELD + name_len..total]);
        let file_len = i64::from_le_bytes(len_bytes);
        if file_len < 0 {
            return Err(RencError::Format(
                "negative file length; may not be an encrypted file".into(),
            ));
        }

        Ok(Self {
            name,
            length: file_len as u64,
        })
    }
}

/// Read the `name_len` field from the first decrypted metadata block.
///
/// # Panics (by contract)
///
/// `first_block` must hold at least [`NAME_LEN_FIELD`] bytes; callers always
/// pass a full decrypted block.
pub fn read_name_len(first_block: &[u8]) -> Result<usize, RencError> {
    let mut bytes = [0u8; NAME_LEN_FIELD];
    bytes.copy_from_slice(&first_block[..NAME_LEN_FIELD]);
    let name_len = i32::from_le_bytes(bytes);
    if name_len < 0 {
        return Err(RencError::Format(
            "negative filename length; may not be an encrypted file".into(),
        ));
    }
    Ok(name_len as usize)
}

/// Write the format version field.
pub fn write_version<W: Write>(writer: &mut W) -> Result<(), RencError> {
    writer.write_all(&FORMAT_VERSION.to_le_bytes())?;
    Ok(())
}

/// Read and check the format version field. Any mismatch is a fatal format
/// error: the file is either from a different format revision or not a
/// container at all.
pub fn read_version<R: Read>(reader: &mut R) -> Result<(), RencError> {
    let mut bytes = [0u8; VERSION_LEN];
    reader.read_exact(&mut bytes)?;
    let version = i32::from_le_bytes(bytes);
    if version != FORMAT_VERSION {
        return Err(RencError::Format(format!(
            "unsupported container version {version} (expected {FORMAT_VERSION})"
        )));
    }
    Ok(())
}
