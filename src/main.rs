use anyhow::{Context, Result};
use clap::Parser;

use torview::cli::Args;
use torview::inspect::print_preview;
use torview::preview;

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        println!("Reading: {}", args.torrent.display());
    }

    // One background task per load; the finished preview comes back once.
    let rx = preview::load(args.torrent.clone());
    let preview = rx
        .recv()
        .context("Preview worker terminated unexpectedly")??;

    print_preview(&preview, &args)
}
