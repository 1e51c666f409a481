//! # Secure-Gate Type Aliases
//!
//! Type aliases for secure memory management using
//! [`secure-gate`](https://github.com/Slurp9187/secure-gate). All key
//! material and the password live in these wrappers: zeroized on drop,
//! readable only through explicit `.expose_secret()` /
//! `.expose_secret_mut()` calls.
//!
//! - [`PasswordString`] — the user's password
//! - [`WrappingKey32`] — key derived from password + keyfile; wraps/unwraps
//!   the session key and never touches file content directly
//! - [`SessionKey32`] — random per-file key for metadata and content
//! - [`Digest64`] — HMAC-SHA512 output being folded down to a wrapping key
//! - [`Block16`] — one AES block of plaintext or key material in flight

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

use hmac::Hmac;
use sha2::Sha512;

/// HMAC-SHA512, keyed by the password during key derivation.
pub type HmacSha512 = Hmac<Sha512>;

/// Generic secure stack buffer (direct alias to secure-gate's `Fixed`).
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

/// One 16-byte block of sensitive data.
pub type Block16 = SpanBuffer<16>;

dynamic_alias!(pub PasswordString, String);

fixed_alias!(pub WrappingKey32, 32); // derived from password + keyfile
fixed_alias!(pub SessionKey32, 32); // random, one per encode
fixed_alias!(pub Digest64, 64); // raw HMAC-SHA512 digest before folding
