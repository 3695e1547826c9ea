use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "filesize", version)]
#[command(about = "Show size and metadata of files and directories", long_about = None)]
pub struct Cli {
    /// Files or directories to report on (defaults to this program itself)
    #[arg(allow_hyphen_values = true)]
    pub paths: Vec<PathBuf>,
}
