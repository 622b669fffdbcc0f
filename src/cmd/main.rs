use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use textcipher::cipher::{CipherSpec, mode_code, new_cipher};
use textcipher::{AesCipher, encoding};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "textcipher", about = "Text encryption toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encrypt text with the cipher described in a TOML spec file
    Encrypt {
        /// Path to the cipher spec file
        #[arg(long, default_value = "cipher.toml")]
        spec: String,
        /// Override the spec's input mode (plaintext, base64, hex)
        #[arg(long)]
        input_mode: Option<String>,
        /// Override the spec's output mode (plaintext, base64, hex)
        #[arg(long)]
        output_mode: Option<String>,
        text: String,
    },
    /// Decrypt text with the cipher described in a TOML spec file
    Decrypt {
        #[arg(long, default_value = "cipher.toml")]
        spec: String,
        #[arg(long)]
        input_mode: Option<String>,
        #[arg(long)]
        output_mode: Option<String>,
        text: String,
    },
    /// Generate a random AES key and IV, printed as base64
    GenKey {
        /// Key length in bits (128, 192 or 256)
        #[arg(long, default_value_t = 128)]
        bits: usize,
    },
}

#[derive(Debug, Deserialize)]
struct JobConfig {
    cipher: CipherSpec,
}

fn load(path: &str) -> anyhow::Result<JobConfig> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read spec file {}", path))?;
    let config: JobConfig =
        toml::from_str(&content).with_context(|| format!("failed to parse spec file {}", path))?;
    Ok(config)
}

/// Applies mode-name overrides to a loaded spec. Unknown names map to the
/// sentinel -1, which the cipher factory rejects.
fn override_modes(spec: &mut CipherSpec, input: Option<&str>, output: Option<&str>) {
    let (input_mode, output_mode) = match spec {
        CipherSpec::Caesar {
            input_mode,
            output_mode,
            ..
        }
        | CipherSpec::Vigenere {
            input_mode,
            output_mode,
            ..
        }
        | CipherSpec::Aes {
            input_mode,
            output_mode,
            ..
        } => (input_mode, output_mode),
    };
    if let Some(name) = input {
        *input_mode = mode_code(name);
    }
    if let Some(name) = output {
        *output_mode = mode_code(name);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Encrypt {
            spec,
            input_mode,
            output_mode,
            text,
        } => {
            let mut config = load(&spec)?.cipher;
            override_modes(&mut config, input_mode.as_deref(), output_mode.as_deref());
            let cipher = new_cipher(&config)?;
            let ciphertext = cipher.encrypt(&text).context("encryption failed")?;
            println!("{}", ciphertext);
        }
        Command::Decrypt {
            spec,
            input_mode,
            output_mode,
            text,
        } => {
            let mut config = load(&spec)?.cipher;
            override_modes(&mut config, input_mode.as_deref(), output_mode.as_deref());
            let cipher = new_cipher(&config)?;
            let plaintext = cipher.decrypt(&text).context("decryption failed")?;
            println!("{}", plaintext);
        }
        Command::GenKey { bits } => {
            let key = AesCipher::generate_key(bits)?;
            let iv = AesCipher::generate_iv();
            tracing::info!("Generated AES-{} key material", bits);
            println!("key = \"{}\"", encoding::base64_encode_bytes(&key));
            println!("iv = \"{}\"", encoding::base64_encode_bytes(&iv));
        }
    }
    Ok(())
}

fn main() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .with_line_number(true)
            .with_file(true)
            .finish(),
    )
    .unwrap();

    if let Err(e) = run() {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
