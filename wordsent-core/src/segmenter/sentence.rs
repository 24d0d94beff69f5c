//! Sentence output type

use crate::token::Token;
use std::ops::Deref;

/// Ordered tokens of one sentence, borrowed from the input
#[derive(Debug, PartialEq, Eq)]
pub struct Sentence<'a, T: ?Sized> {
    tokens: Vec<&'a T>,
}

impl<'a, T: ?Sized> Sentence<'a, T> {
    pub(crate) fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub(crate) fn push(&mut self, token: &'a T) {
        self.tokens.push(token);
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in input order
    pub fn tokens(&self) -> &[&'a T] {
        &self.tokens
    }

    /// Iterate over the tokens
    pub fn iter(&self) -> std::slice::Iter<'_, &'a T> {
        self.tokens.iter()
    }

    /// Give up the sentence wrapper
    pub fn into_tokens(self) -> Vec<&'a T> {
        self.tokens
    }
}

impl<T: Token + ?Sized> Sentence<'_, T> {
    /// Token texts in order
    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().filter_map(|t| t.text()).collect()
    }
}

impl<T: ?Sized> Clone for Sentence<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tokens: self.tokens.clone(),
        }
    }
}

impl<'a, T: ?Sized> Deref for Sentence<'a, T> {
    type Target = [&'a T];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl<'a, T: ?Sized> IntoIterator for Sentence<'a, T> {
    type Item = &'a T;
    type IntoIter = std::vec::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'s, 'a, T: ?Sized> IntoIterator for &'s Sentence<'a, T> {
    type Item = &'s &'a T;
    type IntoIter = std::slice::Iter<'s, &'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
