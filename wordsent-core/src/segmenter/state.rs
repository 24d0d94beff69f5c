//! Scan state for one segmentation call

use super::sentence::Sentence;
use crate::config::BoundaryConfig;
use crate::token::Token;

/// Annotation-derived flags for a single token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TokenFlags {
    pub forced_end: bool,
    pub opens_forced_wait: bool,
    pub in_multi_token_expr: bool,
}

impl TokenFlags {
    /// A present forced-end annotation, of either value, shadows the other
    /// two hints.
    pub(crate) fn of<T: Token + ?Sized>(token: &T) -> Self {
        match token.forced_end() {
            Some(forced_end) => Self {
                forced_end,
                ..Self::default()
            },
            None if token.forced_until_end() == Some(true) => Self {
                opens_forced_wait: true,
                ..Self::default()
            },
            None => Self {
                in_multi_token_expr: token.multi_token_span_end() == Some(false),
                ..Self::default()
            },
        }
    }
}

/// What happened to a token that reached the break rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Appended to the current sentence
    Kept,
    /// Dropped
    Dropped,
}

/// Mutable bookkeeping threaded through a single left-to-right pass
pub(crate) struct ScanState<'a, 'c, T: ?Sized> {
    config: &'c BoundaryConfig,
    sentences: Vec<Sentence<'a, T>>,
    current: Sentence<'a, T>,
    /// Index into `sentences` of the most recently flushed sentence
    last: Option<usize>,
    inside_region: bool,
    waiting_for_forced_end: bool,
    dropped: usize,
}

impl<'a, 'c, T: Token + ?Sized> ScanState<'a, 'c, T> {
    pub(crate) fn new(config: &'c BoundaryConfig) -> Self {
        Self {
            config,
            sentences: Vec::new(),
            current: Sentence::new(),
            last: None,
            inside_region: false,
            waiting_for_forced_end: false,
            dropped: 0,
        }
    }

    /// Classify one token and update the state
    pub(crate) fn step(&mut self, token: &'a T, text: &str) {
        let flags = TokenFlags::of(token);
        if flags.opens_forced_wait {
            self.waiting_for_forced_end = true;
        }

        if !self.inside_region {
            if let Some(opens) = self.config.matches_region_begin(text) {
                if opens {
                    log::trace!("{text:?}: region opened");
                    self.inside_region = true;
                } else {
                    log::trace!("{text:?}: outside region, dropped");
                }
                self.dropped += 1;
                return;
            }
        }

        if self.current.is_empty() && self.config.is_follower(text) {
            if let Some(last) = self.last {
                log::trace!("{text:?}: follower, attached to sentence {last}");
                self.sentences[last].push(token);
                return;
            }
        }

        let (placement, new_sentence) = self.decide(text, flags);
        match placement {
            Placement::Kept => self.current.push(token),
            Placement::Dropped => self.dropped += 1,
        }
        if new_sentence {
            self.flush();
        }
    }

    fn decide(&mut self, text: &str, flags: TokenFlags) -> (Placement, bool) {
        if self.waiting_for_forced_end && !flags.forced_end {
            log::trace!("{text:?}: waiting for forced end, kept");
            (Placement::Kept, false)
        } else if flags.in_multi_token_expr && !flags.forced_end {
            log::trace!("{text:?}: inside multi-token span, kept");
            (Placement::Kept, false)
        } else if self.config.matches_discard(text) {
            log::trace!("{text:?}: discarded separator");
            (Placement::Dropped, true)
        } else if self.config.matches_region_end(text) {
            log::trace!("{text:?}: region closed");
            self.inside_region = false;
            (Placement::Dropped, true)
        } else if self.config.matches_boundary(text) {
            log::trace!("{text:?}: sentence boundary");
            (Placement::Kept, true)
        } else if flags.forced_end {
            log::trace!("{text:?}: forced sentence end");
            self.waiting_for_forced_end = false;
            (Placement::Kept, true)
        } else {
            (Placement::Kept, false)
        }
    }

    fn flush(&mut self) {
        if self.current.is_empty() && !self.config.allow_empty_sentences() {
            return;
        }
        let completed = std::mem::replace(&mut self.current, Sentence::new());
        log::trace!(
            "sentence {} completed with {} tokens",
            self.sentences.len(),
            completed.len()
        );
        self.last = Some(self.sentences.len());
        self.sentences.push(completed);
    }

    /// End of input closes any pending sentence without synthesizing a
    /// boundary token
    pub(crate) fn finish(mut self) -> (Vec<Sentence<'a, T>>, usize) {
        if !self.current.is_empty() {
            self.sentences.push(self.current);
        }
        (self.sentences, self.dropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::AnnotatedToken;

    #[test]
    fn test_flags_plain_token() {
        assert_eq!(TokenFlags::of("word"), TokenFlags::default());
    }

    #[test]
    fn test_flags_forced_end_shadows_other_hints() {
        let token = AnnotatedToken::new("x")
            .with_forced_end(false)
            .with_forced_until_end(true)
            .with_span_end(false);
        assert_eq!(TokenFlags::of(&token), TokenFlags::default());

        let token = AnnotatedToken::new("x")
            .with_forced_end(true)
            .with_span_end(false);
        assert!(TokenFlags::of(&token).forced_end);
        assert!(!TokenFlags::of(&token).in_multi_token_expr);
    }

    #[test]
    fn test_flags_forced_until_end_shadows_span() {
        let token = AnnotatedToken::new("x")
            .with_forced_until_end(true)
            .with_span_end(false);
        let flags = TokenFlags::of(&token);
        assert!(flags.opens_forced_wait);
        assert!(!flags.in_multi_token_expr);
    }

    #[test]
    fn test_flags_span_end() {
        let mid = AnnotatedToken::new("x").with_span_end(false);
        let end = AnnotatedToken::new("x").with_span_end(true);
        assert!(TokenFlags::of(&mid).in_multi_token_expr);
        assert!(!TokenFlags::of(&end).in_multi_token_expr);
    }

    #[test]
    fn test_step_and_finish() {
        let config = BoundaryConfig::default();
        let tokens = ["a", ".", "\"", "b"];
        let mut state = ScanState::new(&config);
        for token in &tokens {
            state.step(*token, token);
        }
        let (sentences, dropped) = state.finish();
        assert_eq!(dropped, 0);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].texts(), vec!["a", ".", "\""]);
        assert_eq!(sentences[1].texts(), vec!["b"]);
    }
}
