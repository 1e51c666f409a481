// src/decryptor/mod.rs

//! Decode side of the container pipeline.

pub(crate) mod decrypt;
pub(crate) mod read;
pub(crate) mod session;
pub(crate) mod stream;

pub use decrypt::{begin_decode, decode_file, Decoder};
pub use session::unwrap_session_key;
pub use stream::BlockReader;
