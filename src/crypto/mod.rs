// src/crypto/mod.rs

pub mod engine;
pub mod kdf;
pub mod rng;

pub use engine::BlockCipherEngine;
pub use kdf::{derive_wrapping_key, derive_wrapping_key_from_reader};
pub use rng::generate_session_key;
