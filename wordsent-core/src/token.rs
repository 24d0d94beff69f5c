//! Token capability consumed by the segmenter
//!
//! The segmenter never inspects concrete token types. Anything that can
//! produce its surface text, and optionally expose externally computed
//! boundary annotations, can be segmented.

use serde::{Deserialize, Serialize};

/// A unit of an already-tokenized text stream
pub trait Token {
    /// Surface form used for all pattern matching
    ///
    /// `None` means the token has no text value, which makes a
    /// segmentation call fail.
    fn text(&self) -> Option<&str>;

    /// `Some(true)` forces a sentence to end at this token
    ///
    /// Any `Some` value, including `Some(false)`, makes the segmenter ignore
    /// [`forced_until_end`](Token::forced_until_end) and
    /// [`multi_token_span_end`](Token::multi_token_span_end) for this token.
    fn forced_end(&self) -> Option<bool> {
        None
    }

    /// `Some(true)` suppresses breaks until a forced end is seen
    fn forced_until_end(&self) -> Option<bool> {
        None
    }

    /// `Some(false)` marks a token in the middle of a multi-token span
    fn multi_token_span_end(&self) -> Option<bool> {
        None
    }
}

impl Token for str {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Token for String {
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: Token + ?Sized> Token for &T {
    fn text(&self) -> Option<&str> {
        (**self).text()
    }

    fn forced_end(&self) -> Option<bool> {
        (**self).forced_end()
    }

    fn forced_until_end(&self) -> Option<bool> {
        (**self).forced_until_end()
    }

    fn multi_token_span_end(&self) -> Option<bool> {
        (**self).multi_token_span_end()
    }
}

impl<T: Token + ?Sized> Token for Box<T> {
    fn text(&self) -> Option<&str> {
        (**self).text()
    }

    fn forced_end(&self) -> Option<bool> {
        (**self).forced_end()
    }

    fn forced_until_end(&self) -> Option<bool> {
        (**self).forced_until_end()
    }

    fn multi_token_span_end(&self) -> Option<bool> {
        (**self).multi_token_span_end()
    }
}

/// Token carrying annotations from an upstream tagger
///
/// Mirrors a loosely structured annotation map: every field is optional,
/// including the text itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Surface form
    #[serde(default)]
    pub text: Option<String>,
    /// Forced sentence end hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_end: Option<bool>,
    /// Suppress breaks until the next forced end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_until_end: Option<bool>,
    /// Multi-token span membership; `Some(false)` while inside the span
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_token_span_end: Option<bool>,
}

impl AnnotatedToken {
    /// Plain token with no annotations
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Mark this token as a forced sentence end (or explicitly not one)
    pub fn with_forced_end(mut self, value: bool) -> Self {
        self.forced_end = Some(value);
        self
    }

    /// Mark this token as opening a wait-for-forced-end stretch
    pub fn with_forced_until_end(mut self, value: bool) -> Self {
        self.forced_until_end = Some(value);
        self
    }

    /// Tag this token as part of a multi-token span
    pub fn with_span_end(mut self, is_end: bool) -> Self {
        self.multi_token_span_end = Some(is_end);
        self
    }
}

impl Token for AnnotatedToken {
    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn forced_end(&self) -> Option<bool> {
        self.forced_end
    }

    fn forced_until_end(&self) -> Option<bool> {
        self.forced_until_end
    }

    fn multi_token_span_end(&self) -> Option<bool> {
        self.multi_token_span_end
    }
}
