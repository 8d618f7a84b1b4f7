use clap::Parser;
use mxlibrary::{config, library::Library, output, resolve};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mxlibrary")]
#[command(version)]
#[command(about = "Package SVG icons into a draw.io shape library")]
#[command(long_about = "\
Package SVG icons into a draw.io shape library

Each file matched by PATTERNS becomes one shape. The icon is embedded as a
data URI, so the library works without the original files.

Titles come from file names: dashes become spaces and a leading brand token
gets exactly one space after it.

  AWS-Simple-Storage.svg  →  \"AWS Simple Storage\"
  AWSLambda.svg           →  \"AWS Lambda\"

Quote patterns to let mxlibrary expand them:

  mxlibrary 'icons/**/*.svg' -o aws.mxlibrary")]
struct Cli {
    /// Glob patterns selecting the icon files
    #[arg(required = true, value_name = "PATTERNS")]
    patterns: Vec<String>,

    /// Output library file [default: aws-icons.mxlibrary]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file overriding title and shape defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(cli.config.as_deref())?;
    let output_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output));

    let files = resolve::resolve_patterns_with(&cli.patterns, |skipped| {
        output::print_skipped(&skipped)
    })?;
    output::print_found(files.len());

    let library = Library::build(&files, &config)?;
    library.write(&output_path)?;
    output::print_library_output(&library, &output_path);

    Ok(())
}
