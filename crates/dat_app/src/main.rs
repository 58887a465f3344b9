mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = platform::args::Args::parse();
    platform::app::run(&args)
}
