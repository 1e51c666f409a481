// src/main.rs

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use renc::password::read_password_visible;
use renc::{decode_file, derive_wrapping_key, encode_file};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Encrypt a single file into a self-contained container, or decrypt one.
#[derive(Parser, Debug)]
#[command(name = "renc", disable_version_flag = true)]
struct Cli {
    /// Input file (plaintext to encrypt, or container to decrypt)
    #[arg(short = 'i', value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output container (encrypt mode only; decrypt recreates the stored name)
    #[arg(short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Keyfile whose content feeds the key derivation
    #[arg(short = 'k', value_name = "FILE")]
    keyfile: Option<PathBuf>,

    /// Decrypt instead of encrypt
    #[arg(long = "dec")]
    dec: bool,

    /// Print version and exit
    #[arg(short = 'v')]
    version: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.version {
        println!("renc {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(input) = cli.input.as_deref() else {
        Cli::command().print_help()?;
        std::process::exit(2);
    };

    let keyfile = cli.keyfile.clone().unwrap_or_default();

    println!("input password:");
    println!("( the password is echoed to the terminal )");
    let password = read_password_visible()?;
    let wrapping_key = derive_wrapping_key(&password, &keyfile)
        .with_context(|| format!("deriving key from {}", keyfile.display()))?;

    if cli.dec {
        let restored = decode_file(input, &wrapping_key)
            .with_context(|| format!("decrypting {}", input.display()))?;
        println!("decrypt finished: {}", restored.display());
    } else {
        let Some(output) = cli.output.as_deref() else {
            Cli::command().print_help()?;
            std::process::exit(2);
        };
        if input == output {
            bail!("input and output are the same file");
        }
        encode_file(input, output, &wrapping_key)
            .with_context(|| format!("encrypting {}", input.display()))?;
        println!("encrypt finished: {}", output.display());
    }

    Ok(())
}
