use std::process::Command;

use eyre::{Result, WrapErr, bail};
use log::debug;
use serde::Deserialize;

use crate::VideoMetadata;

/// The subset of yt-dlp's JSON dump this program cares about.
/// Unknown fields are ignored; every field here may be absent or null.
#[derive(Debug, Deserialize)]
struct LookupInfo {
    title: Option<String>,
    description: Option<String>,
    view_count: Option<u64>,
    upload_date: Option<String>,
    duration: Option<f64>,
    uploader: Option<String>,
    channel_id: Option<String>,
    channel_url: Option<String>,
    thumbnail: Option<String>,
    categories: Option<Vec<String>>,
    tags: Option<Vec<String>>,
    like_count: Option<u64>,
}

/// Look up video metadata by running yt-dlp against the raw URL
pub fn lookup(yt_dlp: &str, url: &str, video_id: &str) -> Result<VideoMetadata> {
    debug!("Running {yt_dlp} -J for {url}");

    let output = match Command::new(yt_dlp)
        .args(["-J", "--no-playlist", "--no-warnings", url])
        .output()
    {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            bail!(
                "{yt_dlp} not found. Install it to enable metadata lookup:\n  \
                 pip install yt-dlp\n  \
                 or: brew install yt-dlp"
            );
        }
        Err(e) => bail!("failed to run {yt_dlp}: {e}"),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("{yt_dlp} exited with status {}: {}", output.status, stderr.trim());
    }

    let info: LookupInfo =
        serde_json::from_slice(&output.stdout).wrap_err_with(|| format!("unparseable {yt_dlp} output"))?;

    Ok(into_record(video_id, info))
}

fn into_record(video_id: &str, info: LookupInfo) -> VideoMetadata {
    VideoMetadata {
        video_id: video_id.to_string(),
        title: info.title,
        description: info.description,
        views: info.view_count,
        publish_date: info.upload_date,
        length: info.duration,
        author: info.uploader,
        channel_id: info.channel_id,
        channel_url: info.channel_url,
        thumbnail_url: info.thumbnail,
        categories: info.categories,
        tags: info.tags,
        likes: info.like_count,
        transcript: None,
        transcript_language: None,
        transcript_text: None,
    }
}
