use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ytmeta",
    about = "Extract metadata and transcripts from YouTube videos",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// YouTube video URL or video ID (prompts if omitted)
    pub url: Option<String>,

    /// Write the result to a JSON file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preferred transcript languages, in order of preference
    #[arg(short, long, num_args = 1.., value_name = "CODE")]
    pub languages: Option<Vec<String>>,

    /// Show extra diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}
