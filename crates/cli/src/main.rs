use anyhow::Result;
use clap::Parser;
use env_logger::init;
use fontprobe_cli::cli::Cli;

fn main() -> Result<()> {
    init();
    Cli::parse().run()
}
