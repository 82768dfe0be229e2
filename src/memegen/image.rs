use url::Url;

use crate::command::escape::EMPTY_CAPTION;
use crate::errors::{AppError, AppResult};

/// Parameters for a single rendered meme image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub template_slug: String,
    pub top_text: String,
    pub bottom_text: String,
    pub override_url: Option<String>,
    pub display_width: Option<u32>,
}

impl ImageRequest {
    /// Build `<base>/<slug>/<top>/<bottom>.jpg[?alt=<url>]`.
    ///
    /// Each part is pushed as exactly one path segment, so `/`, `\` and `%`
    /// in captions are percent-encoded instead of splitting the path. Any path
    /// prefix on the base URL is kept.
    pub fn to_url(&self, base: &Url) -> AppResult<Url> {
        let top = caption_segment(&self.top_text);
        let bottom = format!("{}.jpg", caption_segment(&self.bottom_text));

        // URL parsers collapse `.` and `..`; these cannot be sent literally.
        for segment in [self.template_slug.as_str(), top] {
            if is_dot_segment(segment) {
                return Err(AppError::unrenderable_text(segment));
            }
        }

        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        let prefix_len = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).count())
            .unwrap_or(0);

        url.path_segments_mut()
            .map_err(|_| AppError::invalid_config_value("memegen-url", base.as_str()))?
            .pop_if_empty()
            .push(&self.template_slug)
            .push(top)
            .push(&bottom);
        url.set_query(self.query().as_deref());

        let segment_count = url.path_segments().map(Iterator::count).unwrap_or(0);
        if segment_count != prefix_len + 3 {
            return Err(AppError::unrenderable_text(url.path()));
        }
        Ok(url)
    }

    /// Query string for a custom image override
    pub fn query(&self) -> Option<String> {
        self.override_url.as_ref().map(|alt| format!("alt={}", alt))
    }
}

/// Caption text as sent to memegen; a missing caption becomes `_`
fn caption_segment(caption: &str) -> &str {
    if caption.is_empty() {
        EMPTY_CAPTION
    } else {
        caption
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}
