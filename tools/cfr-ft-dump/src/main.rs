extern crate libfilmtable;

use clap::Parser;
use miette::{IntoDiagnostic, Result};

use libfilmtable::crypt;

#[derive(Parser, Debug)]
#[command(name = "CFR Film Table Dump")]
#[command(about, author, version, long_about = None)]
struct Cli {
    /// Film table files; ".flm" files are decrypted first
    #[arg(required = true)]
    files: Vec<String>,
}

pub fn main() -> Result<()> {
    let stdout = console::Term::stdout();
    let cli = Cli::parse();

    for file in cli.files {
        dump_table(&stdout, &file)?;
    }

    Ok(())
}

fn is_encrypted_name(file: &str) -> bool {
    file.to_ascii_lowercase().ends_with(".flm")
}

fn high_bit_mark(value: u16) -> &'static str {
    if value & 0x8000 != 0 {
        "!"
    } else {
        " "
    }
}

fn dump_table(stdout: &console::Term, file: &str) -> Result<()> {
    let mut buffer = std::fs::read(file).into_diagnostic()?;

    if is_encrypted_name(file) {
        buffer = crypt::decrypt(&buffer);
    }

    let table = libfilmtable::decode(&buffer)?;
    let header = &table.header;

    stdout.write_line(&format!("---> {}", file)).into_diagnostic()?;
    stdout
        .write_line(&format!("Name: {}", header.display_name()))
        .into_diagnostic()?;
    stdout
        .write_line(&format!(
            "CameraType: {} ({})",
            header.camera_type.as_raw(),
            header.camera_type
        ))
        .into_diagnostic()?;
    stdout
        .write_line(&format!("Flags: {}", header.flags))
        .into_diagnostic()?;
    stdout
        .write_line(&format!(
            "AspectRatio: {} {}",
            header.aspect_wide, header.aspect_tall
        ))
        .into_diagnostic()?;

    for (index, (triad, pair)) in header.gains.iter().zip(header.magic.iter()).enumerate() {
        let text = format!(
            "GT ent {}: w={:4}, ({:3}{} {:3}{} {:3}{}), {}",
            index + 1,
            pair.a,
            triad.a & 0x7fff,
            high_bit_mark(triad.a),
            triad.b & 0x7fff,
            high_bit_mark(triad.b),
            triad.c & 0x7fff,
            high_bit_mark(triad.c),
            pair.b,
        );
        stdout.write_line(&text).into_diagnostic()?;
    }

    let mut sums = [0u64; 4];
    for entry in &table.lut {
        for (sum, byte) in sums.iter_mut().zip(entry.to_bytes()) {
            *sum += u64::from(byte);
        }
    }

    stdout
        .write_line(&format!(
            "LUTMax: {} {} {} {}\n",
            sums[0], sums[1], sums[2], sums[3]
        ))
        .into_diagnostic()?;

    Ok(())
}
