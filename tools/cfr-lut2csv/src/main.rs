extern crate libfilmtable;

use clap::Parser;
use miette::{IntoDiagnostic, Result};

use libfilmtable::crypt;

#[derive(Parser, Debug)]
#[command(name = "CFR LUT to CSV")]
#[command(about, author, version, long_about = None)]
struct Cli {
    /// Input film table
    #[arg(short, long)]
    input: String,
    /// Treat the input as already decrypted
    #[arg(short, long, default_value_t = false)]
    decrypted: bool,
}

pub fn main() -> Result<()> {
    let stdout = console::Term::stdout();
    let cli = Cli::parse();

    let mut buffer = std::fs::read(&cli.input).into_diagnostic()?;

    if !cli.decrypted {
        buffer = crypt::decrypt(&buffer);
    }

    let table = libfilmtable::decode(&buffer)?;

    stdout
        .write_line(&format!("# {}: {}", cli.input, table.header.display_name()))
        .into_diagnostic()?;

    // Cumulative channel sums. The r/g/b/k columns read raw byte
    // positions 2, 1, 0, 3; the true channel order is unresolved
    // upstream, so the historical column mapping is kept.
    let (mut r, mut g, mut b, mut k) = (0u32, 0u32, 0u32, 0u32);
    for (index, entry) in table.lut.iter().enumerate() {
        let bytes = entry.to_bytes();
        k += u32::from(bytes[3]);
        r += u32::from(bytes[2]);
        g += u32::from(bytes[1]);
        b += u32::from(bytes[0]);
        stdout
            .write_line(&format!("{},{},{},{},{}", index, r, g, b, k))
            .into_diagnostic()?;
    }

    Ok(())
}
