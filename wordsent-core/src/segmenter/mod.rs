//! Sentence segmentation over a token stream
//!
//! The segmenter makes a single left-to-right pass with no backtracking.
//! Each token is classified, in priority order, as a region marker, a
//! follower of the previous sentence, a protected span member, a discarded
//! separator, a boundary, a forced end or an ordinary token. The resulting
//! break decisions group the kept tokens into sentences.

mod sentence;
mod state;

pub use sentence::Sentence;

use crate::config::BoundaryConfig;
use crate::error::{Result, SegmentError};
use crate::token::Token;
use state::ScanState;
use std::sync::Arc;

/// Group `tokens` into sentences according to `config`
///
/// Fails without partial output if any token has no text.
pub fn segment<'a, T>(tokens: &'a [T], config: &BoundaryConfig) -> Result<Vec<Sentence<'a, T>>>
where
    T: Token,
{
    segment_with_stats(tokens, config).map(|(sentences, _)| sentences)
}

/// Like [`segment`], also reporting what was kept and dropped
pub fn segment_with_stats<'a, T>(
    tokens: &'a [T],
    config: &BoundaryConfig,
) -> Result<(Vec<Sentence<'a, T>>, SegmentationStats)>
where
    T: Token,
{
    if config.one_sentence() {
        validate_texts(tokens)?;
        let sentences = if tokens.is_empty() {
            Vec::new()
        } else {
            let mut sentence = Sentence::new();
            tokens.iter().for_each(|t| sentence.push(t));
            vec![sentence]
        };
        let stats = SegmentationStats::new(&sentences, 0);
        return Ok((sentences, stats));
    }

    let mut state = ScanState::new(config);
    for (index, token) in tokens.iter().enumerate() {
        let text = token.text().ok_or(SegmentError::MissingText { index })?;
        state.step(token, text);
    }
    let (sentences, dropped) = state.finish();
    let stats = SegmentationStats::new(&sentences, dropped);

    log::debug!(
        "Segmented {} tokens into {} sentences ({} dropped)",
        tokens.len(),
        stats.sentences,
        stats.tokens_dropped
    );
    Ok((sentences, stats))
}

fn validate_texts<T: Token>(tokens: &[T]) -> Result<()> {
    match tokens.iter().position(|t| t.text().is_none()) {
        Some(index) => Err(SegmentError::MissingText { index }),
        None => Ok(()),
    }
}

/// Summary of one segmentation call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentationStats {
    /// Sentences produced
    pub sentences: usize,
    /// Tokens placed in some sentence
    pub tokens_kept: usize,
    /// Separators, region markers and out-of-region tokens
    pub tokens_dropped: usize,
}

impl SegmentationStats {
    fn new<T: ?Sized>(sentences: &[Sentence<'_, T>], dropped: usize) -> Self {
        Self {
            sentences: sentences.len(),
            tokens_kept: sentences.iter().map(Sentence::len).sum(),
            tokens_dropped: dropped,
        }
    }
}

/// Reusable segmenter sharing one configuration across calls
///
/// Cloning is cheap and the configuration is never mutated, so one
/// segmenter can serve many threads.
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: Arc<BoundaryConfig>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::with_default_config()
    }
}

impl Segmenter {
    /// Create a segmenter for `config`
    pub fn new(config: impl Into<Arc<BoundaryConfig>>) -> Self {
        Self {
            config: config.into(),
        }
    }

    /// Create a segmenter with the default English rules
    pub fn with_default_config() -> Self {
        Self::new(BoundaryConfig::default())
    }

    /// The configuration in use
    pub fn config(&self) -> &BoundaryConfig {
        &self.config
    }

    /// Group `tokens` into sentences
    pub fn segment<'a, T: Token>(&self, tokens: &'a [T]) -> Result<Vec<Sentence<'a, T>>> {
        segment(tokens, &self.config)
    }

    /// Group `tokens` into sentences and report statistics
    pub fn segment_with_stats<'a, T: Token>(
        &self,
        tokens: &'a [T],
    ) -> Result<(Vec<Sentence<'a, T>>, SegmentationStats)> {
        segment_with_stats(tokens, &self.config)
    }

    /// Segment many documents, preserving document order
    ///
    /// With the `parallel` feature the documents are processed on the rayon
    /// thread pool. A failing document fails the whole batch with
    /// [`SegmentError::InDocument`] naming its position.
    #[cfg(feature = "parallel")]
    pub fn segment_batch<'a, T, D>(&self, documents: &'a [D]) -> Result<Vec<Vec<Sentence<'a, T>>>>
    where
        T: Token + Sync + 'a,
        D: AsRef<[T]> + Sync,
    {
        use rayon::prelude::*;

        documents
            .par_iter()
            .enumerate()
            .map(|(i, doc)| segment(doc.as_ref(), &self.config).map_err(|e| e.in_document(i)))
            .collect()
    }

    /// Segment many documents, preserving document order
    ///
    /// The first failing document fails the whole batch with
    /// [`SegmentError::InDocument`] naming its position.
    #[cfg(not(feature = "parallel"))]
    pub fn segment_batch<'a, T, D>(&self, documents: &'a [D]) -> Result<Vec<Vec<Sentence<'a, T>>>>
    where
        T: Token + 'a,
        D: AsRef<[T]>,
    {
        documents
            .iter()
            .enumerate()
            .map(|(i, doc)| segment(doc.as_ref(), &self.config).map_err(|e| e.in_document(i)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::AnnotatedToken;

    fn texts<T: Token>(sentences: &[Sentence<'_, T>]) -> Vec<Vec<String>> {
        sentences
            .iter()
            .map(|s| s.texts().into_iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_simple_split() {
        let tokens = ["I", "ran", ".", "She", "won", "."];
        let sentences = segment(&tokens, &BoundaryConfig::default()).unwrap();
        assert_eq!(
            texts(&sentences),
            vec![vec!["I", "ran", "."], vec!["She", "won", "."]]
        );
    }

    #[test]
    fn test_sentences_borrow_input_tokens() {
        let tokens = vec!["a".to_string(), ".".to_string()];
        let sentences = segment(&tokens, &BoundaryConfig::default()).unwrap();
        assert!(std::ptr::eq(sentences[0][0], &tokens[0]));
    }

    #[test]
    fn test_missing_text_fails_whole_call() {
        let tokens = vec![
            AnnotatedToken::new("a"),
            AnnotatedToken::new("."),
            AnnotatedToken::default(),
        ];
        let err = segment(&tokens, &BoundaryConfig::default()).unwrap_err();
        assert_eq!(err, SegmentError::MissingText { index: 2 });
    }

    #[test]
    fn test_one_sentence_mode() {
        let mut config = BoundaryConfig::default();
        config.set_one_sentence(true);
        let tokens = ["a", ".", "b", "*NL*"];
        let sentences = segment(&tokens, &config).unwrap();
        assert_eq!(texts(&sentences), vec![vec!["a", ".", "b", "*NL*"]]);

        let empty: [&str; 0] = [];
        assert!(segment(&empty, &config).unwrap().is_empty());
    }

    #[test]
    fn test_one_sentence_mode_still_validates_text() {
        let mut config = BoundaryConfig::default();
        config.set_one_sentence(true);
        let tokens = vec![AnnotatedToken::new("a"), AnnotatedToken::default()];
        assert_eq!(
            segment(&tokens, &config).unwrap_err(),
            SegmentError::MissingText { index: 1 }
        );
    }

    #[test]
    fn test_stats() {
        let tokens = ["A", "*NL*", "*NL*", "B", "."];
        let (sentences, stats) =
            segment_with_stats(&tokens, &BoundaryConfig::default()).unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(
            stats,
            SegmentationStats {
                sentences: 2,
                tokens_kept: 3,
                tokens_dropped: 2,
            }
        );
    }

    #[test]
    fn test_segmenter_batch_preserves_order() {
        let segmenter = Segmenter::with_default_config();
        let docs = vec![
            vec!["a", ".", "b"],
            vec!["c"],
            vec![],
            vec!["d", "!", "!"],
        ];
        let results = segmenter.segment_batch(&docs).unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(texts(&results[0]), vec![vec!["a", "."], vec!["b"]]);
        assert_eq!(texts(&results[1]), vec![vec!["c"]]);
        assert!(results[2].is_empty());
        assert_eq!(texts(&results[3]), vec![vec!["d", "!"], vec!["!"]]);
    }

    #[test]
    fn test_segmenter_batch_error_names_document() {
        let segmenter = Segmenter::with_default_config();
        let docs = vec![
            vec![AnnotatedToken::new("a")],
            vec![AnnotatedToken::new("b"), AnnotatedToken::default()],
        ];
        let err = segmenter.segment_batch(&docs).unwrap_err();
        assert_eq!(
            err,
            SegmentError::InDocument {
                document: 1,
                source: Box::new(SegmentError::MissingText { index: 1 }),
            }
        );
    }
}
