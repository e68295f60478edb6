use eyre::Result;
use log::debug;

use crate::Segment;

/// Languages tried when the caller supplies no preference
pub const DEFAULT_LANGUAGES: &[&str] = &["en", "hi"];

/// One available caption track, as reported by the caption service
#[derive(Debug, Clone)]
pub struct CaptionTrack {
    pub language_code: String,
    pub is_generated: bool,
    pub is_translatable: bool,
    pub base_url: String,
}

/// The caption-service operations the selector depends on
#[allow(async_fn_in_trait)]
pub trait CaptionSource {
    async fn list_tracks(&self, video_id: &str) -> Result<Vec<CaptionTrack>>;
    async fn fetch_track(&self, track: &CaptionTrack) -> Result<Vec<Segment>>;
}

/// A transcript chosen by the fallback search
#[derive(Debug, Clone)]
pub struct SelectedTranscript {
    pub language: String,
    pub segments: Vec<Segment>,
}

impl SelectedTranscript {
    /// All segment texts joined with single spaces, in segment order
    pub fn joined_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Choose one transcript for a video, trying in order: each preferred
/// language, the first human-authored track, the first machine-generated
/// track. Fetch failures within a tier move on to the next option; a failed
/// track listing or an exhausted search yields `None`, never an error.
pub async fn select_transcript<S: CaptionSource>(
    source: &S,
    video_id: &str,
    languages: &[String],
) -> Option<SelectedTranscript> {
    let tracks = match source.list_tracks(video_id).await {
        Ok(tracks) => tracks,
        Err(e) => {
            eprintln!("Error retrieving transcript: {e}");
            return None;
        }
    };

    let preferred: Vec<String> = if languages.is_empty() {
        DEFAULT_LANGUAGES.iter().map(|s| (*s).to_string()).collect()
    } else {
        languages.to_vec()
    };

    for lang in &preferred {
        let Some(track) = tracks.iter().find(|t| &t.language_code == lang) else {
            continue;
        };
        match source.fetch_track(track).await {
            Ok(segments) => {
                debug!("Selected preferred-language track: {lang}");
                return Some(SelectedTranscript {
                    language: track.language_code.clone(),
                    segments,
                });
            }
            Err(e) => {
                // Missing track and transient fetch failure are treated alike
                debug!("Fetch failed for preferred language {lang}: {e}");
            }
        }
    }

    if let Some(track) = tracks.iter().find(|t| !t.is_generated) {
        if let Ok(segments) = source.fetch_track(track).await {
            debug!("Selected manual track: {}", track.language_code);
            return Some(SelectedTranscript {
                language: track.language_code.clone(),
                segments,
            });
        }
    }

    if let Some(track) = tracks.iter().find(|t| t.is_generated) {
        if let Ok(segments) = source.fetch_track(track).await {
            debug!("Selected generated track: {}", track.language_code);
            return Some(SelectedTranscript {
                language: track.language_code.clone(),
                segments,
            });
        }
    }

    report_available(&tracks);
    None
}

fn report_available(tracks: &[CaptionTrack]) {
    eprintln!("Available transcript languages:");
    for track in tracks {
        let kind = if track.is_generated { "(GENERATED)" } else { "(MANUALLY CREATED)" };
        let translatable = if track.is_translatable { "[TRANSLATABLE]" } else { "" };
        eprintln!(" - {} {kind}{translatable}", track.language_code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::bail;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeCaptions {
        tracks: Vec<CaptionTrack>,
        list_error: bool,
        failing: Vec<String>,
        fetched: RefCell<Vec<String>>,
    }

    impl CaptionSource for FakeCaptions {
        async fn list_tracks(&self, _video_id: &str) -> Result<Vec<CaptionTrack>> {
            if self.list_error {
                bail!("service unavailable");
            }
            Ok(self.tracks.clone())
        }

        async fn fetch_track(&self, track: &CaptionTrack) -> Result<Vec<Segment>> {
            self.fetched.borrow_mut().push(track.language_code.clone());
            if self.failing.contains(&track.language_code) {
                bail!("fetch failed");
            }
            Ok(vec![Segment {
                start: 0.0,
                duration: Some(1.0),
                text: format!("{} text", track.language_code),
            }])
        }
    }

    fn track(code: &str, generated: bool) -> CaptionTrack {
        CaptionTrack {
            language_code: code.to_string(),
            is_generated: generated,
            is_translatable: false,
            base_url: format!("https://captions.invalid/{code}"),
        }
    }

    fn langs(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|s| (*s).to_string()).collect()
    }

    #[tokio::test]
    async fn test_preferred_language_beats_manual_track() {
        // en is generated, hi is manual; en still wins because it is preferred first
        let fake = FakeCaptions {
            tracks: vec![track("hi", false), track("en", true)],
            ..Default::default()
        };
        let selected = select_transcript(&fake, "vid", &langs(&["en", "hi"])).await.unwrap();
        assert_eq!(selected.language, "en");
        assert_eq!(fake.fetched.borrow().as_slice(), ["en"]);
    }

    #[tokio::test]
    async fn test_preference_order_respected() {
        let fake = FakeCaptions {
            tracks: vec![track("en", false), track("hi", false)],
            ..Default::default()
        };
        let selected = select_transcript(&fake, "vid", &langs(&["hi", "en"])).await.unwrap();
        assert_eq!(selected.language, "hi");
    }

    #[tokio::test]
    async fn test_failed_preferred_fetch_tries_next_language() {
        let fake = FakeCaptions {
            tracks: vec![track("en", false), track("hi", false)],
            failing: vec!["en".to_string()],
            ..Default::default()
        };
        let selected = select_transcript(&fake, "vid", &langs(&["en", "hi"])).await.unwrap();
        assert_eq!(selected.language, "hi");
        assert_eq!(fake.fetched.borrow().as_slice(), ["en", "hi"]);
    }

    #[tokio::test]
    async fn test_manual_track_beats_generated_track() {
        // No preferred language available; the manual de track wins over
        // the generated fr track even though fr is listed first
        let fake = FakeCaptions {
            tracks: vec![track("fr", true), track("de", false)],
            ..Default::default()
        };
        let selected = select_transcript(&fake, "vid", &langs(&["en", "hi"])).await.unwrap();
        assert_eq!(selected.language, "de");
        assert_eq!(fake.fetched.borrow().as_slice(), ["de"]);
    }

    #[tokio::test]
    async fn test_generated_track_as_last_resort() {
        let fake = FakeCaptions {
            tracks: vec![track("fr", true)],
            ..Default::default()
        };
        let selected = select_transcript(&fake, "vid", &langs(&["en", "hi"])).await.unwrap();
        assert_eq!(selected.language, "fr");
    }

    #[tokio::test]
    async fn test_no_tracks_yields_none() {
        let fake = FakeCaptions::default();
        assert!(select_transcript(&fake, "vid", &langs(&["en"])).await.is_none());
    }

    #[tokio::test]
    async fn test_listing_error_yields_none() {
        let fake = FakeCaptions {
            list_error: true,
            ..Default::default()
        };
        assert!(select_transcript(&fake, "vid", &langs(&["en"])).await.is_none());
        assert!(fake.fetched.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_all_fetches_fail_yields_none() {
        let fake = FakeCaptions {
            tracks: vec![track("en", false), track("fr", true)],
            failing: vec!["en".to_string(), "fr".to_string()],
            ..Default::default()
        };
        assert!(select_transcript(&fake, "vid", &langs(&["en"])).await.is_none());
        // en tried as preferred, en again as first manual, fr as first generated
        assert_eq!(fake.fetched.borrow().as_slice(), ["en", "en", "fr"]);
    }

    #[tokio::test]
    async fn test_empty_preference_uses_defaults() {
        let fake = FakeCaptions {
            tracks: vec![track("hi", true)],
            ..Default::default()
        };
        let selected = select_transcript(&fake, "vid", &[]).await.unwrap();
        assert_eq!(selected.language, "hi");
    }

    #[test]
    fn test_joined_text() {
        let selected = SelectedTranscript {
            language: "en".to_string(),
            segments: vec![
                Segment { start: 0.0, duration: Some(1.0), text: "Hello".to_string() },
                Segment { start: 1.0, duration: Some(1.0), text: "world".to_string() },
            ],
        };
        assert_eq!(selected.joined_text(), "Hello world");
    }
}
