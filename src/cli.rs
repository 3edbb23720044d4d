use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "torview",
    version,
    about = "A CLI utility to inspect BitTorrent metainfo files",
    author = "torview contributors"
)]
pub struct Args {
    /// The .torrent file to inspect
    #[arg(value_name = "TORRENT")]
    pub torrent: PathBuf,

    /// Print metadata and file tree as JSON
    #[arg(long = "json", conflicts_with = "magnet")]
    pub json: bool,

    /// Print only the magnet link
    #[arg(short = 'm', long = "magnet")]
    pub magnet: bool,

    /// Show padding files in the file tree
    #[arg(short = 'P', long = "show-padding")]
    pub show_padding: bool,

    /// Limit the printed tree to N levels
    #[arg(long = "depth", value_name = "N")]
    pub depth: Option<usize>,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
