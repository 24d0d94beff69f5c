//! Boundary configuration
//!
//! A [`BoundaryConfig`] bundles every rule the segmenter consults: the
//! sentence-ending pattern, the follower tokens, the discardable separators
//! and the optional region markers. All patterns are compiled once at
//! construction and always match against the whole token text.

mod pattern;
mod spec;

pub use pattern::WholeTokenPattern;
pub use spec::BoundarySpec;

use crate::error::ConfigResult;
use std::collections::BTreeSet;
use std::path::Path;

/// Single period, or any run of `!` and `?`
pub const DEFAULT_BOUNDARY_PATTERN: &str = r"\.|[!?]+";

/// Closing punctuation that stays with the sentence it follows
pub const DEFAULT_FOLLOWERS: &[&str] = &[")", "]", "\"", "'", "''", "-RRB-", "-RSB-", "-RCB-"];

/// Newline tokens emitted by whitespace and PTB-style tokenizers
pub const DEFAULT_DISCARD: &[&str] = &["\n", NEWLINE_TOKEN];

/// Newline marker used by PTB-style tokenizers
pub const NEWLINE_TOKEN: &str = "*NL*";

/// Immutable set of boundary rules shared across segmentation calls
#[derive(Debug, Clone)]
pub struct BoundaryConfig {
    boundary: WholeTokenPattern,
    followers: BTreeSet<String>,
    discard: Vec<WholeTokenPattern>,
    discard_literals: Vec<String>,
    discard_regexes: Vec<String>,
    html_tags: Vec<String>,
    region_begin: Option<WholeTokenPattern>,
    region_end: Option<WholeTokenPattern>,
    one_sentence: bool,
    allow_empty_sentences: bool,
}

impl Default for BoundaryConfig {
    /// English-style `. ! ?` boundaries with the standard followers and
    /// newline separators
    fn default() -> Self {
        Self::with_boundary_pattern(DEFAULT_BOUNDARY_PATTERN)
            .expect("default boundary pattern should compile")
    }
}

impl BoundaryConfig {
    /// Default followers and discard tokens with a caller supplied boundary
    /// pattern
    pub fn with_boundary_pattern(pattern: &str) -> ConfigResult<Self> {
        Self::new(pattern, DEFAULT_FOLLOWERS, DEFAULT_DISCARD)
    }

    /// Fully explicit configuration without region markers
    ///
    /// `discard` entries are literal token texts, not patterns.
    pub fn new<F, D>(pattern: &str, followers: F, discard: D) -> ConfigResult<Self>
    where
        F: IntoIterator,
        F::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        Self::builder()
            .boundary_pattern(pattern)
            .followers(followers)
            .discard(discard)
            .build()
    }

    /// Start a builder preloaded with the default rules
    pub fn builder() -> BoundaryConfigBuilder {
        BoundaryConfigBuilder::default()
    }

    /// Build a configuration from its file schema
    pub fn from_spec(spec: &BoundarySpec) -> ConfigResult<Self> {
        BoundaryConfigBuilder::from(spec.clone()).build()
    }

    /// Load a TOML configuration file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        Self::from_spec(&BoundarySpec::from_file(path)?)
    }

    /// Describe this configuration in its file schema
    pub fn to_spec(&self) -> BoundarySpec {
        BoundarySpec {
            boundary_pattern: self.boundary.as_str().to_string(),
            followers: self.followers.iter().cloned().collect(),
            discard: self.discard_literals.clone(),
            discard_patterns: self.discard_regexes.clone(),
            html_tags: self.html_tags.clone(),
            region_begin: self.region_begin.as_ref().map(|p| p.as_str().to_string()),
            region_end: self.region_end.as_ref().map(|p| p.as_str().to_string()),
            one_sentence: self.one_sentence,
            allow_empty_sentences: self.allow_empty_sentences,
        }
    }

    /// Discard HTML tags by name
    ///
    /// Each tag adds two case-insensitive patterns: the bare open, close or
    /// self-closing form, and the open form carrying attributes. Tags that
    /// were already added are skipped.
    pub fn add_html_discard_tags<I>(&mut self, tags: I) -> ConfigResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for tag in tags {
            let tag = tag.as_ref();
            if self.html_tags.iter().any(|known| known == tag) {
                continue;
            }
            self.discard.extend(WholeTokenPattern::html_tag(tag)?);
            self.html_tags.push(tag.to_string());
            log::debug!("Discarding HTML tag <{tag}>");
        }
        Ok(())
    }

    /// Replace every discard rule with exact-text matches
    pub fn set_discard<I>(&mut self, tokens: I) -> ConfigResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let literals: Vec<String> = tokens.into_iter().map(|t| t.as_ref().to_string()).collect();
        self.discard = literals
            .iter()
            .map(|t| WholeTokenPattern::literal("discard", t))
            .collect::<ConfigResult<_>>()?;
        self.discard_literals = literals;
        self.discard_regexes.clear();
        self.html_tags.clear();
        Ok(())
    }

    /// Toggle treating the whole input as one sentence
    pub fn set_one_sentence(&mut self, one_sentence: bool) {
        self.one_sentence = one_sentence;
    }

    /// Toggle emitting empty sentences between adjacent breaks
    pub fn set_allow_empty_sentences(&mut self, allow: bool) {
        self.allow_empty_sentences = allow;
    }

    /// Source of the sentence-ending pattern
    pub fn boundary_pattern(&self) -> &str {
        self.boundary.as_str()
    }

    /// Tokens that attach to the sentence they follow
    pub fn followers(&self) -> &BTreeSet<String> {
        &self.followers
    }

    /// Compiled discard rules in evaluation order
    pub fn discard_patterns(&self) -> &[WholeTokenPattern] {
        &self.discard
    }

    /// Source of the region-begin pattern, if any
    pub fn region_begin_pattern(&self) -> Option<&str> {
        self.region_begin.as_ref().map(WholeTokenPattern::as_str)
    }

    /// Source of the region-end pattern, if any
    pub fn region_end_pattern(&self) -> Option<&str> {
        self.region_end.as_ref().map(WholeTokenPattern::as_str)
    }

    /// Whether all input forms a single sentence
    pub fn one_sentence(&self) -> bool {
        self.one_sentence
    }

    /// Whether empty sentences may be emitted
    pub fn allow_empty_sentences(&self) -> bool {
        self.allow_empty_sentences
    }

    /// Whether `text` is a sentence-ending token
    pub fn matches_boundary(&self, text: &str) -> bool {
        self.boundary.matches(text)
    }

    /// Whether `text` is a separator to drop
    pub fn matches_discard(&self, text: &str) -> bool {
        self.discard.iter().any(|p| p.matches(text))
    }

    /// Whether `text` may attach to the preceding sentence
    pub fn is_follower(&self, text: &str) -> bool {
        self.followers.contains(text)
    }

    /// Whether `text` opens a region; `None` when regions are not configured
    pub fn matches_region_begin(&self, text: &str) -> Option<bool> {
        self.region_begin.as_ref().map(|p| p.matches(text))
    }

    /// Whether `text` closes a region
    pub fn matches_region_end(&self, text: &str) -> bool {
        self.region_end.as_ref().is_some_and(|p| p.matches(text))
    }
}

/// Fluent builder for [`BoundaryConfig`]
///
/// Starts from the default rules. Patterns are only compiled in
/// [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct BoundaryConfigBuilder {
    spec: BoundarySpec,
}

impl From<BoundarySpec> for BoundaryConfigBuilder {
    fn from(spec: BoundarySpec) -> Self {
        Self { spec }
    }
}

impl BoundaryConfigBuilder {
    /// Create a builder with the default rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sentence-ending pattern
    pub fn boundary_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.spec.boundary_pattern = pattern.into();
        self
    }

    /// Replace the follower tokens
    pub fn followers<I>(mut self, followers: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.spec.followers = followers
            .into_iter()
            .map(|f| f.as_ref().to_string())
            .collect();
        self
    }

    /// Replace the literal discard tokens
    pub fn discard<I>(mut self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.spec.discard = tokens.into_iter().map(|t| t.as_ref().to_string()).collect();
        self
    }

    /// Add a discard regex
    pub fn discard_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.spec.discard_patterns.push(pattern.into());
        self
    }

    /// Add HTML tags to discard
    pub fn html_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.spec
            .html_tags
            .extend(tags.into_iter().map(|t| t.as_ref().to_string()));
        self
    }

    /// Only keep tokens after a token matching `pattern`
    pub fn region_begin(mut self, pattern: impl Into<String>) -> Self {
        self.spec.region_begin = Some(pattern.into());
        self
    }

    /// Close the region at a token matching `pattern`
    pub fn region_end(mut self, pattern: impl Into<String>) -> Self {
        self.spec.region_end = Some(pattern.into());
        self
    }

    /// Treat the whole input as one sentence
    pub fn one_sentence(mut self, one_sentence: bool) -> Self {
        self.spec.one_sentence = one_sentence;
        self
    }

    /// Allow empty sentences between adjacent breaks
    pub fn allow_empty_sentences(mut self, allow: bool) -> Self {
        self.spec.allow_empty_sentences = allow;
        self
    }

    /// Compile every pattern and produce the configuration
    pub fn build(self) -> ConfigResult<BoundaryConfig> {
        let spec = self.spec;
        let boundary = WholeTokenPattern::new("boundary", &spec.boundary_pattern)?;

        let mut discard = Vec::with_capacity(spec.discard.len() + spec.discard_patterns.len());
        for literal in &spec.discard {
            discard.push(WholeTokenPattern::literal("discard", literal)?);
        }
        for pattern in &spec.discard_patterns {
            discard.push(WholeTokenPattern::new("discard", pattern)?);
        }

        let region_begin = spec
            .region_begin
            .as_deref()
            .map(|p| WholeTokenPattern::new("region begin", p))
            .transpose()?;
        let region_end = spec
            .region_end
            .as_deref()
            .map(|p| WholeTokenPattern::new("region end", p))
            .transpose()?;

        let mut config = BoundaryConfig {
            boundary,
            followers: spec.followers.into_iter().collect(),
            discard,
            discard_literals: spec.discard,
            discard_regexes: spec.discard_patterns,
            html_tags: Vec::new(),
            region_begin,
            region_end,
            one_sentence: spec.one_sentence,
            allow_empty_sentences: spec.allow_empty_sentences,
        };
        config.add_html_discard_tags(&spec.html_tags)?;

        log::debug!(
            "Built boundary config: boundary={:?}, followers={}, discard rules={}",
            config.boundary_pattern(),
            config.followers.len(),
            config.discard.len()
        );
        Ok(config)
    }
}
