//! Video URL detection and embed markup.
//!
//! A line that consists entirely of a recognized video URL (YouTube watch or
//! short link, Vimeo, or a `[wpvideo ID]` VideoPress token) is replaced with
//! an embed block before any other rendering pass runs.

use std::sync::LazyLock;

use regex::Regex;

static YOUTUBE_WATCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?youtube\.com/watch\?v=([\w-]+)(?:&\S*)?$").expect("valid regex")
});

static YOUTUBE_SHORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://youtu\.be/([\w-]+)(?:\?\S*)?$").expect("valid regex"));

static VIMEO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://(?:www\.)?vimeo\.com/(\d+)$").expect("valid regex"));

static WPVIDEO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[wpvideo\s+([A-Za-z0-9]+)\]$").expect("valid regex"));

/// Returns embed markup if the (trimmed) line is entirely a video reference.
pub fn embed_for_line(line: &str) -> Option<String> {
    if let Some(caps) = YOUTUBE_WATCH.captures(line).or_else(|| YOUTUBE_SHORT.captures(line)) {
        return Some(iframe(&format!(
            "https://www.youtube.com/embed/{}",
            &caps[1]
        )));
    }
    if let Some(caps) = VIMEO.captures(line) {
        return Some(iframe(&format!("https://player.vimeo.com/video/{}", &caps[1])));
    }
    if let Some(caps) = WPVIDEO.captures(line) {
        // VideoPress tokens can only be resolved by wordpress.com; emit a placeholder.
        return Some(format!(
            "<div class=\"video-embed video-placeholder\">[wpvideo {}]</div>",
            &caps[1]
        ));
    }
    None
}

fn iframe(src: &str) -> String {
    format!(
        "<div class=\"video-embed\"><iframe src=\"{src}\" frameborder=\"0\" allowfullscreen></iframe></div>"
    )
}
