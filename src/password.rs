//! Password acquisition.
//!
//! The core only ever consumes a [`PasswordString`]; how it is obtained is a
//! pluggable capability. The default reader takes one visible line from
//! standard input, matching the original tool's (weak) behavior — callers
//! wanting hidden input can substitute their own source without touching
//! the encode/decode contract.

use crate::aliases::PasswordString;
use crate::error::RencError;
use std::io::BufRead;

/// Read one line of password text from `input`, with whatever echo the
/// terminal applies (none is suppressed here).
pub fn read_password_from<R: BufRead>(mut input: R) -> Result<PasswordString, RencError> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
    Ok(PasswordString::new(trimmed))
}

/// Read a visibly-echoed password line from standard input.
pub fn read_password_visible() -> Result<PasswordString, RencError> {
    read_password_from(std::io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secure_gate::RevealSecret;
    use std::io::Cursor;

    #[test]
    fn strips_line_ending_only() {
        let pw = read_password_from(Cursor::new(b"hunter2\n".to_vec())).unwrap();
        assert_eq!(pw.expose_secret(), "hunter2");

        let pw = read_password_from(Cursor::new(b"  spaced  \r\n".to_vec())).unwrap();
        assert_eq!(pw.expose_secret(), "  spaced  ");
    }
}
