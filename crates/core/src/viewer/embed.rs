//! Resolve raw video URLs into embeddable player URLs.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Matches every common YouTube URL shape and captures the 11-char video id:
/// `watch?v=`, `youtu.be/`, `embed/`, `shorts/`, `live/`, `v/`, on the
/// `www.`, `m.` and `music.` hosts as well as `youtube-nocookie.com`.
static YOUTUBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:(?:www|m|music)\.)?(?:youtube(?:-nocookie)?\.com/(?:watch\?(?:[^#]*&)?v=|embed/|shorts/|live/|v/)|youtu\.be/)([A-Za-z0-9_-]{11})",
    )
    .expect("valid regex")
});

/// Matches `vimeo.com/<id>`, `vimeo.com/channels/<name>/<id>`,
/// `vimeo.com/groups/<name>/videos/<id>` and `player.vimeo.com/video/<id>`.
static VIMEO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.|player\.)?vimeo\.com/(?:video/|channels/[^/]+/|groups/[^/]+/videos/)?(\d+)",
    )
    .expect("valid regex")
});

/// How a video material is played back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum VideoPlayback {
    YouTube { video_id: String, embed_url: String },
    Vimeo { video_id: String, embed_url: String },
    /// Unrecognized host; the URL is used as-is.
    Direct { url: String },
    /// No URL to play. Rendered as an error state.
    Unavailable,
}

impl VideoPlayback {
    /// The URL to hand to the player, if any.
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::YouTube { embed_url, .. } | Self::Vimeo { embed_url, .. } => Some(embed_url),
            Self::Direct { url } => Some(url),
            Self::Unavailable => None,
        }
    }
}

pub fn resolve_video_url(raw: &str) -> VideoPlayback {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return VideoPlayback::Unavailable;
    }

    if let Some(id) = YOUTUBE_RE.captures(trimmed).and_then(|c| c.get(1)) {
        let video_id = id.as_str().to_string();
        return VideoPlayback::YouTube {
            embed_url: format!("https://www.youtube.com/embed/{video_id}"),
            video_id,
        };
    }

    if let Some(id) = VIMEO_RE.captures(trimmed).and_then(|c| c.get(1)) {
        let video_id = id.as_str().to_string();
        return VideoPlayback::Vimeo {
            embed_url: format!("https://player.vimeo.com/video/{video_id}"),
            video_id,
        };
    }

    VideoPlayback::Direct {
        url: raw.to_string(),
    }
}
