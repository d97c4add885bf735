//! Converts a single image into a headerless raw frame dump.
//!
//! ```text
//! rawframe <INPUT> <OUTPUT> <FORMAT>
//! ```
//!
//! Set `RUST_LOG=debug` to see dimensions, cropping and output sizes.

mod error;

use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use rawframe::PixelFormat;
use rawframe::formats::RgbSliceU8;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

fn supported_formats() -> String {
    let names: Vec<_> = PixelFormat::ALL.iter().map(|format| format.name()).collect();
    format!("Supported formats: {}", names.join(", "))
}

#[derive(Parser, Debug)]
#[command(name = "rawframe", version, about = "Convert an image into a raw RGB, NV12 or YUYV frame", after_help = supported_formats())]
struct Args {
    /// Image to convert
    input: PathBuf,

    /// Raw frame to write, replaced if it exists
    output: PathBuf,

    /// Output layout: rgb, nv12 or yuv422 (also yuyv, "yuv 4:2:2"), any case
    format: String,
}

/// Parses the command line, leaving `--help` and `--version` to clap.
fn parse_args() -> Result<Args, CliError> {
    match Args::try_parse() {
        Ok(args) => Ok(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => Err(CliError::Usage(e)),
    }
}

/// Decodes `input`, converts it and writes the raw bytes to `output`.
fn run(args: &Args) -> Result<(), CliError> {
    // Checked before decoding so a bad format never touches either file.
    let format: PixelFormat = args.format.parse()?;

    // Sniffed from the content, the extension of a capture file says nothing.
    let image = image::ImageReader::open(&args.input)
        .and_then(image::ImageReader::with_guessed_format)
        .map_err(image::ImageError::from)
        .and_then(image::ImageReader::decode)
        .map_err(|source| CliError::Decode {
            path: args.input.clone(),
            source,
        })?
        .into_rgb8();

    let dimensions = (image.width() as usize, image.height() as usize);
    tracing::debug!(input = %args.input.display(), ?dimensions, "decoded image");

    let frame = rawframe::convert(RgbSliceU8::new(image.as_raw(), dimensions)?, format);

    std::fs::write(&args.output, &frame).map_err(|source| CliError::Write {
        path: args.output.clone(),
        source,
    })?;

    tracing::info!(output = %args.output.display(), %format, bytes = frame.len(), "frame written");

    Ok(())
}

fn report(err: &CliError) {
    if let CliError::Usage(usage) = err {
        if usage.print().is_err() {
            eprintln!("{usage}");
        }
        eprintln!("{}", supported_formats());
        return;
    }

    eprintln!("error: {err}");

    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let result = parse_args().and_then(|args| {
        run(&args)?;
        println!("Image saved as {} to {}", args.format.to_ascii_lowercase(), args.output.display());
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}
