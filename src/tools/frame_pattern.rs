use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Widest zero padding accepted; longer names exceed common file name limits.
pub const MAX_PADDING_WIDTH: usize = 255;

/// `%%`, `%Nd` (leading zeros optional), `%d`, or a stray `%`.
static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(?:(%)|0*([0-9]+)d|(d))?").expect("directive regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("frame pattern `{0}` has no numeric placeholder (expected %d or %Nd)")]
    MissingPlaceholder(String),
    #[error("frame pattern `{0}` has more than one numeric placeholder")]
    MultiplePlaceholders(String),
    #[error("frame pattern `{pattern}` has an unsupported `%` directive at byte {offset}")]
    UnsupportedDirective { pattern: String, offset: usize },
}

/// A printf-style frame filename template such as `shot_%04d.png`.
///
/// Only the subset ffmpeg's image2 demuxer accepts for sequences is
/// supported: a single `%d` or `%Nd`, with `%%` standing for a literal `%`.
/// Like ffmpeg, `%4d` zero-pads exactly as `%04d` does, and a zero width
/// means no padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePattern {
    raw: String,
    prefix: String,
    width: Option<usize>,
    suffix: String,
}

impl FramePattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut width = None;
        let mut placeholder_seen = false;
        let mut cursor = 0;

        for caps in DIRECTIVE.captures_iter(pattern) {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            let literal = &pattern[cursor..whole.start];
            cursor = whole.end;

            let target = if placeholder_seen { &mut suffix } else { &mut prefix };
            target.push_str(literal);

            if caps.get(1).is_some() {
                target.push('%');
            } else if caps.get(2).is_some() || caps.get(3).is_some() {
                if placeholder_seen {
                    return Err(PatternError::MultiplePlaceholders(pattern.to_string()));
                }
                placeholder_seen = true;
                width = match caps.get(2) {
                    Some(digits) => {
                        let parsed = digits
                            .as_str()
                            .parse::<usize>()
                            .ok()
                            .filter(|&w| w <= MAX_PADDING_WIDTH)
                            .ok_or_else(|| PatternError::UnsupportedDirective {
                                pattern: pattern.to_string(),
                                offset: whole.start,
                            })?;
                        (parsed > 0).then_some(parsed)
                    }
                    None => None,
                };
            } else {
                return Err(PatternError::UnsupportedDirective {
                    pattern: pattern.to_string(),
                    offset: whole.start,
                });
            }
        }

        if !placeholder_seen {
            return Err(PatternError::MissingPlaceholder(pattern.to_string()));
        }

        let tail = &pattern[cursor..];
        suffix.push_str(tail);

        Ok(Self {
            raw: pattern.to_string(),
            prefix,
            width,
            suffix,
        })
    }

    /// File name of the frame at `index`.
    #[must_use]
    pub fn render(&self, index: u64) -> String {
        let width = self.width.unwrap_or(0);
        format!("{}{index:0width$}{}", self.prefix, self.suffix)
    }
}

impl fmt::Display for FramePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
