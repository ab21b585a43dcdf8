//! zenqoi - convert images to QOI
//!
//! Decodes PNG, JPEG, GIF or WebP to RGBA and writes a `.qoi` file.

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use zenqoi::{Colorspace, EncodeRequest, ImageInfo, PixelLayout, Unstoppable};

#[derive(Parser)]
#[command(name = "zenqoi")]
#[command(version)]
#[command(about = "Convert images to the QOI format", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode an image to QOI
    Encode {
        /// Input image file (PNG, JPEG, GIF, WebP). Prompted for if omitted.
        input: Option<PathBuf>,

        /// Output QOI file. Prompted for on a terminal; otherwise input with .qoi extension.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Tag the image as all-channels-linear instead of sRGB
        #[arg(long)]
        linear: bool,
    },

    /// Print the header of a QOI file
    Info {
        /// Input QOI file
        input: PathBuf,
    },
}

/// Ask on stdin until an existing file is named.
fn prompt_for_input() -> io::Result<PathBuf> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        eprintln!("Please enter the location of the file you would like to convert:");
        io::stderr().flush()?;
        let Some(line) = lines.next() else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no input file given",
            ));
        };
        let path = PathBuf::from(line?.trim());
        if path.is_file() {
            return Ok(path);
        }
        eprintln!("File not found. Try again.");
    }
}

/// Ask on stdin where to save. An empty answer keeps `default`.
fn prompt_for_output(default: PathBuf) -> io::Result<PathBuf> {
    eprintln!(
        "Please enter the location you wish to save as [{}]:",
        default.display()
    );
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(output_or_default(&line, default))
}

fn output_or_default(answer: &str, default: PathBuf) -> PathBuf {
    match answer.trim() {
        "" => default,
        path => PathBuf::from(path),
    }
}

fn encode(input: &Path, output: &Path, linear: bool) -> Result<(), Box<dyn std::error::Error>> {
    let img = image::open(input)
        .map_err(|e| format!("Failed to open '{}': {}", input.display(), e))?;
    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();
    let pixels = rgba_img.into_raw();

    let colorspace = if linear {
        Colorspace::Linear
    } else {
        Colorspace::Srgb
    };

    eprintln!(
        "Encoding '{}' ({}x{}, {:?})",
        input.display(),
        width,
        height,
        colorspace
    );

    let encoded = EncodeRequest::new()
        .with_colorspace(colorspace)
        .encode(&pixels, width, height, PixelLayout::Rgba8, Unstoppable)?;

    fs::write(output, encoded.data())?;
    let raw = pixels.len().max(1);
    eprintln!(
        "Written {} bytes to '{}' ({:.1}% of raw RGBA)",
        encoded.len(),
        output.display(),
        encoded.len() as f64 * 100.0 / raw as f64
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            linear,
        } => {
            let input = match input {
                Some(path) => path,
                None => prompt_for_input()?,
            };
            let default_output = input.with_extension("qoi");
            let output = match output {
                Some(path) => path,
                None if io::stdin().is_terminal() => prompt_for_output(default_output)?,
                None => default_output,
            };
            encode(&input, &output, linear)?;
        }

        Commands::Info { input } => {
            let data = fs::read(&input)
                .map_err(|e| format!("Failed to read '{}': {}", input.display(), e))?;
            let info = ImageInfo::from_bytes(&data)?;
            println!(
                "{}: {}x{}, {} channels, {:?}, {} bytes",
                input.display(),
                info.width,
                info.height,
                info.channels,
                info.colorspace,
                data.len()
            );
        }
    }

    Ok(())
}
