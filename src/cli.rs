use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dimfill")]
#[command(
    author,
    version,
    about = "Fill in missing image_width/image_height values in an SQLite image catalog"
)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(required = true)]
    pub db_path: PathBuf,
}
