use regex::Regex;
use std::sync::LazyLock;

/// Length of every YouTube video identifier
pub const VIDEO_ID_LEN: usize = 11;

const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

// The greedy prefix makes the last marker in the URL win. The `u/<x>/`
// segment accepts ASCII word characters only.
static VIDEO_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/(?-u:\w)/|embed/|watch\?v=|&v=)([^#&?]*).*").unwrap()
});

/// Extracts the video identifier from a YouTube URL.
///
/// Short links, `/v/`, `/u/<x>/`, embed links and `watch?v=` / `&v=` query
/// forms are recognised. Returns `None` unless the token is exactly 11
/// characters.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let captures = VIDEO_URL_REGEX.captures(url)?;
    let id = captures.get(2)?.as_str();
    (id.chars().count() == VIDEO_ID_LEN).then(|| id.to_string())
}

/// Player URL for an extracted video identifier
pub fn embed_url(video_id: &str) -> String {
    format!("{}{}", EMBED_BASE_URL, video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link() {
        assert_eq!(
            youtube_video_id("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_non_video_url() {
        assert_eq!(youtube_video_id("https://example.com/notavideo"), None);
        assert_eq!(youtube_video_id(""), None);
    }

    #[test]
    fn test_supported_url_forms() {
        let urls = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1",
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ#t=10",
            "https://www.youtube.com/u/w/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?si=abc",
        ];

        for url in urls {
            assert_eq!(
                youtube_video_id(url).as_deref(),
                Some("dQw4w9WgXcQ"),
                "url {}",
                url
            );
        }
    }

    #[test]
    fn test_wrong_length_token_is_rejected() {
        assert_eq!(youtube_video_id("https://youtu.be/short"), None);
        assert_eq!(youtube_video_id("https://youtu.be/dQw4w9WgXcQX"), None);
        assert_eq!(youtube_video_id("https://www.youtube.com/watch?v="), None);
    }

    #[test]
    fn test_user_segment_is_ascii_only() {
        assert_eq!(
            youtube_video_id("https://www.youtube.com/u/_/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(youtube_video_id("https://www.youtube.com/u/é/dQw4w9WgXcQ"), None);
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            embed_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }
}
