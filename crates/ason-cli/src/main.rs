use std::fs::{self, File};
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ason-cli", about = "CLI for ASON <-> JSON conversion", version)]
struct Args {
    /// Decode ASON to JSON (default encodes JSON to ASON)
    #[arg(short, long)]
    decode: bool,

    /// Strict mode validation when decoding
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Pretty-print JSON on output (when decoding)
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// When encoding, write the result to `<input>.ason` next to the input
    /// file instead of stdout
    #[arg(long, default_value_t = false)]
    sibling: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    if args.decode {
        let options = ason::Options {
            strict: args.strict,
            pretty: args.pretty,
        };
        let json = ason::ason_to_json(&buf, &options)?;
        println!("{}", json);
        return Ok(());
    }

    let out = ason::json_to_ason(&buf)?;
    if args.sibling {
        let Some(path) = &args.input else {
            bail!("--sibling requires an input file");
        };
        let mut target = path.clone().into_os_string();
        target.push(".ason");
        fs::write(&target, out + "\n")?;
    } else {
        println!("{}", out);
    }
    Ok(())
}
