use eyre::Result;
use log::debug;

use crate::youtube::InnerTubeClient;
use crate::{VideoMetadata, extract_video_id, metadata, transcript};

/// Fetch metadata and a transcript for a video URL and merge them into one
/// record. An unrecognized URL or a failed metadata lookup is an error; a
/// missing transcript is not — the record is simply returned without the
/// transcript fields.
pub async fn extract_metadata(
    client: &reqwest::Client,
    yt_dlp: &str,
    url: &str,
    languages: &[String],
) -> Result<VideoMetadata> {
    let video_id = extract_video_id(url)
        .ok_or_else(|| eyre::eyre!("invalid YouTube URL or could not extract video ID: {url}"))?;
    debug!("Extracted video ID: {video_id}");

    let mut record = metadata::lookup(yt_dlp, url, &video_id)?;

    let captions = InnerTubeClient::new(client);
    if let Some(selected) = transcript::select_transcript(&captions, &video_id, languages).await {
        record.transcript_text = Some(selected.joined_text());
        record.transcript_language = Some(selected.language);
        record.transcript = Some(selected.segments);
    }

    Ok(record)
}
