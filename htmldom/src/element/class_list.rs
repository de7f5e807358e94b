use std::fmt;

/// An ordered list of class tokens without duplicates.
///
/// Insertion order is preserved; pushing a token that is already present
/// keeps the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a whitespace-separated class string into tokens.
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        list.extend_str(classes);
        list
    }

    /// Append a single token. Returns false if it was already present.
    pub fn push(&mut self, token: impl Into<String>) -> bool {
        let token = token.into();
        if token.is_empty() || self.contains(&token) {
            return false;
        }
        self.tokens.push(token);
        true
    }

    /// Append every token of a whitespace-separated class string.
    pub fn extend_str(&mut self, classes: &str) {
        for token in classes.split_whitespace() {
            self.push(token);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn retain(&mut self, f: impl FnMut(&String) -> bool) {
        self.tokens.retain(f);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        Self::parse(classes)
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for token in iter {
            list.push(token);
        }
        list
    }
}

impl<S: Into<String>> Extend<S> for ClassList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for token in iter {
            self.push(token);
        }
    }
}
