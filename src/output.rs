use eyre::Result;

use crate::VideoMetadata;

fn show<T: std::fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Render the record for terminal display: headline fields, the full
/// description, tags when present, and the first three transcript segments
pub fn render_display(meta: &VideoMetadata) -> String {
    let mut lines = vec![
        "--- Video Metadata ---".to_string(),
        format!("Title: {}", show(&meta.title)),
        format!("Author: {}", show(&meta.author)),
        format!("Views: {}", show(&meta.views)),
        format!("Publish Date: {}", show(&meta.publish_date)),
        format!("Length: {} seconds", show(&meta.length)),
        String::new(),
        "--- Description ---".to_string(),
        show(&meta.description),
    ];

    if let Some(tags) = &meta.tags {
        if !tags.is_empty() {
            lines.push(String::new());
            lines.push("--- Tags ---".to_string());
            lines.push(tags.join(", "));
        }
    }

    if let Some(transcript) = &meta.transcript {
        let lang = meta.transcript_language.as_deref().unwrap_or("unknown");
        lines.push(String::new());
        lines.push(format!("--- Transcript (language: {lang}, first 3 segments) ---"));
        for segment in transcript.iter().take(3) {
            lines.push(format!("[{:.1}s]: {}", segment.start, segment.text));
        }
        lines.push("...[truncated]...".to_string());
    }

    lines.join("\n")
}

/// Serialize the record as indented JSON. serde_json leaves non-ASCII text
/// unescaped, so titles and descriptions survive a round trip literally.
pub fn render_json(meta: &VideoMetadata) -> Result<String> {
    Ok(serde_json::to_string_pretty(meta)?)
}
