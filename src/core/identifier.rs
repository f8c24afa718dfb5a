//! Session identifiers used in share links

use std::fmt;

use uuid::Uuid;

pub const ADJECTIVES: [&str; 4] = ["draft", "final", "new", "revised"];
pub const NOUNS: [&str; 4] = ["glass", "paper", "pen", "book"];
pub const COLORS: [&str; 4] = ["red", "blue", "green", "yellow"];

/// Default prefix for share links
pub const DEFAULT_SHARE_BASE: &str = "https://teamcharter.com/p/";

/// Human-readable `<adjective>-<noun>-<color>` token for the session.
///
/// Only 64 combinations exist, so two sessions can easily collide. It is a
/// display token, not a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharterId(String);

impl CharterId {
    /// Generate a random identifier
    pub fn generate() -> Self {
        let entropy = *Uuid::new_v4().as_bytes();
        let mut next = entropy.into_iter();
        Self::generate_with(|len| next.next().map(usize::from).unwrap_or(0) % len)
    }

    /// Generate an identifier using `pick(len)` to choose an index into each word list
    pub fn generate_with(mut pick: impl FnMut(usize) -> usize) -> Self {
        let mut choose = |words: &[&'static str]| words[pick(words.len()) % words.len()];
        let adjective = choose(&ADJECTIVES[..]);
        let noun = choose(&NOUNS[..]);
        let color = choose(&COLORS[..]);
        Self(format!("{}-{}-{}", adjective, noun, color))
    }

    #[allow(dead_code)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Share link for this identifier under `base`
    pub fn share_url(&self, base: &str) -> String {
        format!("{}{}", base, self.0)
    }
}

impl fmt::Display for CharterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
