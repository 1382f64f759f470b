//! URL path value type.
//!
//! # Design
//! A [`Path`] is an ordered list of segments, nothing more. Parsing from a
//! string never fails: input splits on `/`, a leading slash is dropped
//! rather than producing an empty first segment, and the empty string parses
//! to an empty path. `append` and `join` build new values instead of
//! mutating, so a path captured by one middleware can never be changed out
//! from under another.

use std::fmt;

/// An ordered sequence of URL path segments.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Path {
    /// The segments in order, without separators.
    pub segments: Vec<String>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a path by splitting on `/`.
    ///
    /// A leading `/` is not a segment of its own and is dropped; the empty
    /// string yields an empty path. Never fails.
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            return Self::new();
        }
        let trimmed = s.strip_prefix('/').unwrap_or(s);
        Self {
            segments: trimmed.split('/').map(str::to_string).collect(),
        }
    }

    /// Returns a new path with `segment` appended.
    ///
    /// Accepts anything with a string form, so numeric ids and `Display`
    /// enums work directly.
    pub fn append(&self, segment: impl ToString) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    /// Returns a new path with every element of `segments` appended in order.
    pub fn join<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let mut all = self.segments.clone();
        all.extend(segments.into_iter().map(|s| s.to_string()));
        Self { segments: all }
    }

    /// True when the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments joined with `/`, without a leading or trailing slash.
    pub fn full_path(&self) -> String {
        self.segments.join("/")
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}
