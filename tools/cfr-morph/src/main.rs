extern crate libfilmtable;

use clap::Parser;
use miette::{IntoDiagnostic, Result};

use libfilmtable::crypt;

#[derive(Parser, Debug)]
#[command(name = "CFR Morph")]
#[command(about, author, version, long_about = None)]
struct Cli {
    /// Encrypt instead of decrypt
    #[arg(short, long, default_value_t = false)]
    encrypt: bool,
    /// Input file
    #[arg(short, long)]
    input: String,
    /// Output file
    #[arg(short, long)]
    output: String,
}

pub fn main() -> Result<()> {
    let stderr = console::Term::stderr();
    let cli = Cli::parse();

    let action = if cli.encrypt {
        "Encrypting"
    } else {
        "Decrypting"
    };
    stderr
        .write_line(&format!(
            "{} film table {} to {}...",
            action, cli.input, cli.output
        ))
        .into_diagnostic()?;

    let buffer = std::fs::read(&cli.input).into_diagnostic()?;

    // Whole-file stream transform; no size check, any length passes through.
    let morphed = if cli.encrypt {
        crypt::encrypt(&buffer)
    } else {
        crypt::decrypt(&buffer)
    };

    std::fs::write(&cli.output, morphed).into_diagnostic()?;

    Ok(())
}
