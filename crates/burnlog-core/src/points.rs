//! Story-point extraction from card titles.
//!
//! A card carries an estimate when its title starts with a parenthesized
//! non-negative integer followed by a space: `"(3) Fix bug"`. Anything else
//! yields the parser's default. Malformed prefixes never abort a run.

/// Points assigned to cards without a recognizable estimate.
pub const DEFAULT_POINTS: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryPointParser {
    default: u32,
}

impl Default for StoryPointParser {
    fn default() -> Self {
        Self {
            default: DEFAULT_POINTS,
        }
    }
}

impl StoryPointParser {
    pub fn with_default(default: u32) -> Self {
        Self { default }
    }

    pub fn default_points(&self) -> u32 {
        self.default
    }

    pub fn parse(&self, title: &str) -> u32 {
        match leading_points(title) {
            Some(points) => points,
            None => {
                tracing::trace!(title, default = self.default, "no story-point prefix");
                self.default
            }
        }
    }
}

/// Returns the `N` of a `(N) ` prefix, or `None` when absent or malformed.
fn leading_points(title: &str) -> Option<u32> {
    let rest = title.strip_prefix('(')?;
    let close = rest.find(')')?;
    let digits = &rest[..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !rest[close + 1..].starts_with(' ') {
        return None;
    }
    // overflow falls back like any other malformed value
    digits.parse().ok()
}
