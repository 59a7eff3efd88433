//! Query-string lookups for page parameters.
//!
//! Accepts a bare query (`cardId=42`), one with a leading `?`, or a whole
//! location (`/card?cardId=42#top`). Keys and values are percent-decoded;
//! the first occurrence of a key wins.

use std::borrow::Cow;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    pairs: Vec<(String, String)>,
}

impl QueryMap {
    pub fn parse(input: &str) -> Self {
        let query = match input.split_once('?') {
            Some((_, query)) => query,
            None => input,
        };
        let query = query.split('#').next().unwrap_or_default();
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value): (Cow<str>, Cow<str>)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Integer value of `key`, `None` when absent or not a number.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key)?.trim().parse().ok()
    }

    pub fn get_i32_or(&self, key: &str, default: i32) -> i32 {
        self.get(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }
}

/// Builds an encoded query string, skipping empty values.
pub struct QueryWriter {
    inner: form_urlencoded::Serializer<'static, String>,
}

impl Default for QueryWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryWriter {
    pub fn new() -> Self {
        Self {
            inner: form_urlencoded::Serializer::new(String::new()),
        }
    }

    pub fn push(mut self, key: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.inner.append_pair(key, value);
        }
        self
    }

    pub fn push_i64(mut self, key: &str, value: i64) -> Self {
        self.inner.append_pair(key, &value.to_string());
        self
    }

    pub fn finish(mut self) -> String {
        self.inner.finish()
    }
}
