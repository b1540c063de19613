use std::{fs, io::Cursor};

use clap::Parser;
use dynvar::{
    bridge::{deserialize::deserialize_bytes, serialize::serialize},
    value::core::Value,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

/// dynvar classifies lines of text into dynamic values and, on request,
/// sends each one through the blob bridge and back.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells dynvar to read the input from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints the flat blob of every value in hex, followed by the value
    /// rebuilt from it.
    #[arg(short, long)]
    blob: bool,

    /// Logs every bridge step.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "dynvar=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect::<Vec<_>>().join(" ")
}

fn report(value: &Value, blob: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}: {value}", value.kind());

    if blob {
        let bytes = serialize(value)?.to_bytes();
        println!("  blob: {}", hex(&bytes));
        println!("  back: {}", deserialize_bytes(&bytes)?);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let text = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut reader = Cursor::new(text.as_bytes());
    let mut lines = 0usize;

    loop {
        match Value::read_line(&mut reader) {
            Ok(Some(value)) => {
                lines += 1;
                if let Err(e) = report(&value, args.blob) {
                    eprintln!("{e}");
                }
            },
            Ok(None) => break,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }

    debug!(lines, "input classified");

    if lines == 0 {
        eprintln!("No input.");
    }
}

#[cfg(test)]
mod tests {
    use super::hex;

    #[test]
    fn hex_separates_bytes_with_spaces() {
        assert_eq!(hex(&[3, 1, 0, 0xff]), "03 01 00 ff");
        assert_eq!(hex(&[6]), "06");
        assert_eq!(hex(&[]), "");
    }
}
