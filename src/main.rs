mod config;
mod fixture;
mod pdf;

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use config::DEFAULT_OUTPUT;
use fixture::create_fixture;

/// Write a one-page PDF fixture for text-extraction tests.
#[derive(Parser, Debug)]
#[command(name = "pdf_fixture", version)]
#[command(about = "Write test.pdf, a one-page PDF fixture for text-extraction tests.", long_about = None)]
struct Args {}

fn run() -> Result<()> {
    create_fixture(Path::new(DEFAULT_OUTPUT))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let _args = Args::parse();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        for cause in e.chain().skip(1) {
            eprintln!("Caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
