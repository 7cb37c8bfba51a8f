//! Decode a BMP file and print its header summary.
//!
//! The decoded buffer can be written out as raw top-down BGRA for a viewer.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{Level, info};
use zenbmp::{ErrorKind, Limits, Unstoppable, decode_file};

#[derive(Parser)]
#[command(about = "Inspect and decode 8-bit and 32-bit uncompressed BMP files.")]
struct Args {
    /// BMP file to decode.
    input: PathBuf,

    /// Write the decoded top-down BGRA pixels to this file.
    #[arg(long, value_name = "PATH")]
    raw_out: Option<PathBuf>,

    /// Refuse images with more pixels than this.
    #[arg(long, value_name = "N")]
    max_pixels: Option<u64>,

    /// Refuse files larger than this many bytes.
    #[arg(long, value_name = "BYTES")]
    max_file_size: Option<u64>,

    /// Show debug output.
    #[arg(long)]
    debug: bool,

    /// Show informational output.
    #[arg(long)]
    info: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logger(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logger(args: &Args) {
    let level = if args.debug {
        Level::Debug
    } else if args.info {
        Level::Info
    } else {
        Level::Warn
    };
    if simple_logger::init_with_level(level).is_err() {
        eprintln!("warning: logger already initialized");
    }
}

fn run(args: &Args) -> Result<()> {
    let limits = Limits {
        max_pixels: args.max_pixels,
        max_input_bytes: args.max_file_size,
        ..Limits::default()
    };
    let decoded = decode_file(&args.input, Some(&limits), Unstoppable).map_err(|e| {
        let hint = match e.kind() {
            ErrorKind::Format => " (not a BMP file)",
            ErrorKind::Unsupported => " (only uncompressed bottom-up 8-bit and 32-bit BGRA BMPs are supported)",
            ErrorKind::Limit => " (raise --max-pixels or --max-file-size)",
            _ => "",
        };
        anyhow::anyhow!("{e}{hint}")
    })
    .with_context(|| format!("decoding {}", args.input.display()))?;

    decoded.log_summary();
    println!("{}", decoded.summary());
    println!(
        "decoded {}x{} from {}-bit source, {} bytes {:?}",
        decoded.width,
        decoded.height,
        decoded.bit_depth.bits(),
        decoded.pixels().len(),
        decoded.layout
    );

    if let Some(out) = &args.raw_out {
        let pixels = decoded.into_pixels();
        std::fs::write(out, &pixels).with_context(|| format!("writing {}", out.display()))?;
        info!("wrote {} bytes to {}", pixels.len(), out.display());
    }
    Ok(())
}
