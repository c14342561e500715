//! extract_glyphs - dump glyph outlines from a font as a Dart map of
//! SVG path d strings

mod cli;

use clap::Parser;
use glyfd_core::{dart, extract, Font, Result};
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version land here too; those print to stdout
            // and exit zero.
            let uses_stderr = err.use_stderr();
            let _ = err.print();
            return if uses_stderr {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        },
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        },
    }
}

fn run(args: &cli::Cli) -> Result<()> {
    println!("Opening {}", args.font.display());
    let font = Font::from_file(&args.font)?;
    let font_ref = font.font_ref()?;

    let extraction = extract(&font_ref, &args.chars);
    for ch in extraction.missing() {
        println!("No glyph for {ch} in font");
    }
    info!(
        "extracted {} of {} characters",
        extraction.len(),
        args.chars.len()
    );

    println!("Writing {}", args.output.display());
    dart::write(&args.output, &extraction)?;
    println!("Done");
    Ok(())
}
