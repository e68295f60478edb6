use std::io::{self, Write};
use std::path::PathBuf;
use std::process::Command;

use eyre::{Result, WrapErr, bail};
use log::info;

mod cli;

use cli::Cli;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytmeta.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytmeta")
        .join("logs")
}

fn tool_version(name: &str) -> Option<String> {
    Command::new(name)
        .arg("--version")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| {
            String::from_utf8_lossy(&o.stdout)
                .trim()
                .lines()
                .next()
                .unwrap_or("")
                .to_string()
        })
}

fn build_after_help() -> String {
    let yt_dlp = tool_version("yt-dlp");

    let yt_dlp_line = match &yt_dlp {
        Some(v) => format!("  \x1b[32m✅\x1b[0m yt-dlp     {v}"),
        None => "  \x1b[31m❌\x1b[0m yt-dlp     (not found — needed for metadata lookup)".to_string(),
    };

    let log_path = log_dir().join("ytmeta.log");

    format!(
        "\nREQUIRED TOOLS:\n{yt_dlp_line}\n\nLogs are written to: {}",
        log_path.display()
    )
}

fn prompt_for_url() -> Result<String> {
    print!("Enter YouTube video URL: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = ytmeta::config::Config::load().unwrap_or_default();

    if cli.verbose {
        let config_path = ytmeta::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
    }

    // CLI flags take priority over config
    let languages = cli
        .languages
        .clone()
        .or_else(|| config.default_languages.clone())
        .unwrap_or_else(|| vec!["en".to_string(), "hi".to_string()]);
    let yt_dlp = config.yt_dlp_path.as_deref().unwrap_or("yt-dlp");

    let url = match cli.url {
        Some(ref url) => url.trim().to_string(),
        None => prompt_for_url()?,
    };
    if url.is_empty() {
        bail!("no URL provided\n\nUsage: ytmeta <URL>");
    }

    let client = reqwest::Client::new();

    let metadata = ytmeta::extract::extract_metadata(&client, yt_dlp, &url, &languages)
        .await
        .wrap_err("failed to extract metadata")?;

    if cli.verbose {
        eprintln!(
            "Video: {} ({})",
            metadata.title.as_deref().unwrap_or("unknown"),
            metadata.video_id,
        );
        match &metadata.transcript_language {
            Some(lang) => eprintln!("Transcript language: {lang}"),
            None => eprintln!("Transcript: none"),
        }
    }

    if let Some(ref path) = cli.output {
        let json = ytmeta::output::render_json(&metadata)?;
        std::fs::write(path, json)?;
        println!("Metadata saved to {}", path.display());
    } else {
        println!("{}", ytmeta::output::render_display(&metadata));
    }

    Ok(())
}
