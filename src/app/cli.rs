use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds a shortest word ladder between two words of a dictionary.", long_about = None)]
pub struct Cli {
    /// Newline-delimited word list. Prompted for when omitted.
    #[clap(short, long)]
    pub dictionary: Option<PathBuf>,

    /// Print ladders from the first word to the second instead of back from the second.
    #[clap(short, long)]
    pub forward: bool,

    /// Suppress the verbose log file.
    #[clap(short, long)]
    pub quiet: bool,

    /// Where verbose output is written unless --quiet is set.
    #[clap(long, default_value = "wordladder.log")]
    pub log_file: PathBuf,
}
