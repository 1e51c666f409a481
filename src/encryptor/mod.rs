// src/encryptor/mod.rs

//! Encode side of the container pipeline.

pub(crate) mod encrypt;
pub(crate) mod session;
pub(crate) mod stream;

pub use encrypt::{encode, encode_file};
pub use session::wrap_session_key;
pub use stream::CipherWriter;
