//! Video link classification.
//!
//! Project and reel records carry a free-form `videoUrl`/`videoLink` typed in by
//! an editor. [`classify`] turns such a link into a [`VideoReference`] that says
//! which provider hosts it and, when an id can be extracted, the URL to put in
//! an embedded player.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Query string appended to every YouTube embed URL.
pub const YOUTUBE_EMBED_PARAMS: &str = "autoplay=1&rel=0";

/// Query string appended to every Vimeo embed URL.
pub const VIMEO_EMBED_PARAMS: &str = "autoplay=1";

const YOUTUBE_ID_LEN: usize = 11;

static YOUTUBE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/[A-Za-z0-9_]/|embed/|watch\?v=|&v=)([^#&?]*).*")
        .expect("static youtube pattern")
});

static VIMEO_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*(vimeo\.com/)((channels/[A-Za-z0-9_-]+/)|(groups/[A-Za-z0-9_-]+/videos/))?([0-9]+)")
        .expect("static vimeo pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoProvider {
    YouTube,
    Vimeo,
    Unknown,
}

impl Display for VideoProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YouTube => f.write_str("youtube"),
            Self::Vimeo => f.write_str("vimeo"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Result of classifying a video link.
///
/// `video_id` and `embed_url` are absent together: a recognised host with an
/// unusable id is a normal outcome, callers render a fallback instead of a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoReference {
    pub raw_url: String,
    pub provider: VideoProvider,
    pub video_id: Option<String>,
    pub embed_url: Option<String>,
}

impl VideoReference {
    fn unknown(raw_url: &str) -> Self {
        Self {
            raw_url: raw_url.to_string(),
            provider: VideoProvider::Unknown,
            video_id: None,
            embed_url: None,
        }
    }

    fn recognised(
        raw_url: &str,
        provider: VideoProvider,
        video_id: Option<String>,
        embed: impl FnOnce(&str) -> String,
    ) -> Self {
        let embed_url = video_id.as_deref().map(embed);

        Self {
            raw_url: raw_url.to_string(),
            provider,
            video_id,
            embed_url,
        }
    }

    /// True when an embed URL could be derived.
    pub fn is_playable(&self) -> bool {
        self.embed_url.is_some()
    }
}

/// Classify a link as YouTube, Vimeo or unknown and derive its embed URL.
pub fn classify(url: &str) -> VideoReference {
    if url.contains("youtube.com") || url.contains("youtu.be") {
        return VideoReference::recognised(url, VideoProvider::YouTube, youtube_id(url), |id| {
            format!("https://www.youtube.com/embed/{id}?{YOUTUBE_EMBED_PARAMS}")
        });
    }

    if url.contains("vimeo.com") {
        return VideoReference::recognised(url, VideoProvider::Vimeo, vimeo_id(url), |id| {
            format!("https://player.vimeo.com/video/{id}?{VIMEO_EMBED_PARAMS}")
        });
    }

    VideoReference::unknown(url)
}

/// Same as [`classify`], with a missing link treated as unknown.
pub fn classify_optional(url: Option<&str>) -> VideoReference {
    classify(url.unwrap_or_default())
}

fn youtube_id(url: &str) -> Option<String> {
    let captures = YOUTUBE_ID.captures(url)?;
    let id = captures.get(2)?.as_str();
    // Truncated or padded ids are rejected rather than guessed at.
    (id.chars().count() == YOUTUBE_ID_LEN).then(|| id.to_string())
}

fn vimeo_id(url: &str) -> Option<String> {
    VIMEO_ID
        .captures(url)
        .and_then(|captures| captures.get(5))
        .map(|id| id.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_watch_url_with_trailing_params() {
        let video = classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ&feature=youtu.be");

        assert_eq!(video.provider, VideoProvider::YouTube);
        assert_eq!(video.video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(
            video.embed_url.as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&rel=0")
        );
    }

    #[test]
    fn test_youtube_url_forms_agree() {
        let forms = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?t=42",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://www.youtube.com/u/w/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=player_embedded&v=dQw4w9WgXcQ",
        ];

        let expected = classify(forms[0]);
        for form in forms {
            let video = classify(form);
            assert_eq!(video.provider, expected.provider, "{form}");
            assert_eq!(video.video_id, expected.video_id, "{form}");
            assert_eq!(video.embed_url, expected.embed_url, "{form}");
        }
    }

    #[test]
    fn test_youtube_wrong_length_id_is_a_miss() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXc",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQQ",
            "https://youtu.be/",
            "https://www.youtube.com/",
        ] {
            let video = classify(url);
            assert_eq!(video.provider, VideoProvider::YouTube, "{url}");
            assert_eq!(video.video_id, None, "{url}");
            assert_eq!(video.embed_url, None, "{url}");
            assert!(!video.is_playable());
        }
    }

    #[test]
    fn test_vimeo_plain_url() {
        let video = classify("https://vimeo.com/76979871");

        assert_eq!(video.provider, VideoProvider::Vimeo);
        assert_eq!(video.video_id.as_deref(), Some("76979871"));
        assert_eq!(
            video.embed_url.as_deref(),
            Some("https://player.vimeo.com/video/76979871?autoplay=1")
        );
    }

    #[test]
    fn test_vimeo_channel_group_and_extra_segments() {
        let cases = [
            ("https://vimeo.com/channels/staffpicks/123456", "123456"),
            ("https://vimeo.com/groups/motion/videos/987654", "987654"),
            ("https://vimeo.com/76979871/abcdef0123?share=copy", "76979871"),
            ("https://vimeo.com/76979871?autoplay=0#t=30s", "76979871"),
        ];

        for (url, id) in cases {
            let video = classify(url);
            assert_eq!(video.provider, VideoProvider::Vimeo, "{url}");
            assert_eq!(video.video_id.as_deref(), Some(id), "{url}");
        }
    }

    #[test]
    fn test_vimeo_without_numeric_id() {
        let video = classify("https://vimeo.com/studio51");
        assert_eq!(video.provider, VideoProvider::Vimeo);
        assert_eq!(video.video_id, None);
        assert_eq!(video.embed_url, None);
    }

    #[test]
    fn test_unknown_links() {
        for url in [
            "https://example.com/video.mp4",
            "",
            "not a url",
            "ftp://files.example.com/reel.mov",
        ] {
            let video = classify(url);
            assert_eq!(video.provider, VideoProvider::Unknown, "{url}");
            assert_eq!(video.video_id, None);
            assert_eq!(video.embed_url, None);
            assert_eq!(video.raw_url, url);
        }
    }

    #[test]
    fn test_missing_and_odd_input_never_panics() {
        assert_eq!(classify_optional(None).provider, VideoProvider::Unknown);
        assert_eq!(
            classify_optional(Some("https://youtu.be/dQw4w9WgXcQ")).provider,
            VideoProvider::YouTube
        );

        let odd = "\u{0}\u{7}https://youtube.com/watch?v=\n\r\tdQw4w9WgXcQ\u{1b}";
        let video = classify(odd);
        assert_eq!(video.provider, VideoProvider::YouTube);
        assert_eq!(video.video_id, None);

        let long = "x".repeat(100_000);
        assert_eq!(classify(&long).provider, VideoProvider::Unknown);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
        assert_eq!(classify(url), classify(url));
    }

    #[test]
    fn test_provider_display() {
        assert_eq!(VideoProvider::YouTube.to_string(), "youtube");
        assert_eq!(VideoProvider::Vimeo.to_string(), "vimeo");
        assert_eq!(VideoProvider::Unknown.to_string(), "unknown");
    }
}
