/**
 * Command Line
 *
 * `hudbox [CONFIG]` - CONFIG names a config file to read instead of
 * ~/.hudbox.json. An explicit file is never created.
 */
use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "hudbox", version, about = "Borderless, draggable web view windows")]
// Desktop launchers may append their own flags; those are not ours to reject.
#[command(ignore_errors = true)]
pub struct Cli {
    /// Config file to load (default: ~/.hudbox.json)
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}
