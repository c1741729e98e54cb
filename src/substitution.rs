//! Placeholder substitution
//!
//! Replacement works on raw bytes. Files that are not text (images, fonts)
//! come out byte-identical unless they contain the exact token bytes.

use regex::bytes::Regex;

use crate::config::BuildSettings;
use crate::constants::{KEY_TOKEN, URL_TOKEN};
use crate::errors::{Result, generic_error};

/// Result of substituting placeholders in one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted {
    /// The content with every token replaced
    pub content: Vec<u8>,
    /// Number of tokens that were replaced
    pub replacements: usize,
}

/// Table of placeholder tokens and the values that replace them
#[derive(Debug, Clone)]
pub struct Replacements {
    pairs: Vec<(String, String)>,
    matcher: Regex,
}

impl Replacements {
    /// Builds a table from `(token, value)` pairs
    ///
    /// Tokens are matched literally. No token may be empty.
    ///
    /// # Errors
    /// Returns an error if the table is empty or a token is empty
    pub fn new<I, T, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, V)>,
        T: Into<String>,
        V: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(token, value)| (token.into(), value.into()))
            .collect();

        if pairs.is_empty() {
            return Err(generic_error("At least one placeholder token is required"));
        }
        if pairs.iter().any(|(token, _)| token.is_empty()) {
            return Err(generic_error("Placeholder tokens must not be empty"));
        }

        let alternation = pairs
            .iter()
            .map(|(token, _)| regex::escape(token))
            .collect::<Vec<_>>()
            .join("|");
        let matcher = Regex::new(&alternation).map_err(|e| {
            generic_error(&format!("Failed to build placeholder matcher: {e}"))
        })?;

        Ok(Replacements { pairs, matcher })
    }

    /// The fixed URL and key placeholders, filled from the settings
    pub fn from_settings(settings: &BuildSettings) -> Result<Self> {
        Self::new([
            (URL_TOKEN, settings.url.as_str()),
            (KEY_TOKEN, settings.key.as_str()),
        ])
    }

    /// The `(token, value)` pairs in this table
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Replaces every token occurrence in `content`
    ///
    /// Matches are found left to right without overlapping and inserted
    /// values are never scanned again.
    pub fn apply(&self, content: &[u8]) -> Substituted {
        let mut output = Vec::with_capacity(content.len());
        let mut replacements = 0;
        let mut last = 0;

        for found in self.matcher.find_iter(content) {
            output.extend_from_slice(&content[last..found.start()]);
            output.extend_from_slice(self.value_for(found.as_bytes()));
            last = found.end();
            replacements += 1;
        }
        output.extend_from_slice(&content[last..]);

        Substituted {
            content: output,
            replacements,
        }
    }

    fn value_for<'a>(&'a self, token: &'a [u8]) -> &'a [u8] {
        self.pairs
            .iter()
            .find(|(candidate, _)| candidate.as_bytes() == token)
            .map(|(_, value)| value.as_bytes())
            .unwrap_or(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(url: &str, key: &str) -> Replacements {
        Replacements::new([(URL_TOKEN, url), (KEY_TOKEN, key)]).unwrap()
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let replacements = table("https://x.test", "abc123");
        let input = b"__SUPABASE_URL__ / __SUPABASE_ANON_KEY__ / __SUPABASE_URL__";

        let result = replacements.apply(input);

        assert_eq!(result.content, b"https://x.test / abc123 / https://x.test");
        assert_eq!(result.replacements, 3);
    }

    #[test]
    fn test_untouched_content_is_identical() {
        let replacements = table("https://x.test", "abc123");
        let input = b"body { color: red; } /* __SUPABASE_ */";

        let result = replacements.apply(input);

        assert_eq!(result.content, input.to_vec());
        assert_eq!(result.replacements, 0);
    }

    #[test]
    fn test_empty_values_delete_tokens() {
        let replacements = table("", "");
        let result = replacements.apply(br#"const u = "__SUPABASE_URL__";"#);
        assert_eq!(result.content, br#"const u = "";"#.to_vec());
        assert_eq!(result.replacements, 1);
    }

    #[test]
    fn test_values_are_inserted_verbatim() {
        // `$1` would expand in a regex replacement string
        let replacements = table("$1${URL}\\", "__SUPABASE_URL__");
        let result = replacements.apply(b"[__SUPABASE_URL__][__SUPABASE_ANON_KEY__]");
        assert_eq!(result.content, b"[$1${URL}\\][__SUPABASE_URL__]".to_vec());
        assert_eq!(result.replacements, 2);
    }

    #[test]
    fn test_tokens_are_matched_literally() {
        let replacements = Replacements::new([("a.c", "X")]).unwrap();
        let result = replacements.apply(b"abc a.c");
        assert_eq!(result.content, b"abc X".to_vec());
    }

    #[test]
    fn test_value_lookup_per_token() {
        let replacements = table("https://x.test", "abc123");
        assert_eq!(replacements.value_for(URL_TOKEN.as_bytes()), b"https://x.test");
        assert_eq!(replacements.value_for(KEY_TOKEN.as_bytes()), b"abc123");
        // Unknown bytes map to themselves
        assert_eq!(replacements.value_for(b"__OTHER__"), b"__OTHER__");
    }

    #[test]
    fn test_binary_content_passes_through() {
        let replacements = table("https://x.test", "abc123");
        let mut input = vec![0x89, b'P', b'N', b'G', 0x00, 0xff, 0xfe, 0x80];
        input.extend_from_slice(URL_TOKEN.as_bytes());
        input.push(0xc3);

        let result = replacements.apply(&input);

        let mut expected = vec![0x89, b'P', b'N', b'G', 0x00, 0xff, 0xfe, 0x80];
        expected.extend_from_slice(b"https://x.test");
        expected.push(0xc3);
        assert_eq!(result.content, expected);
    }

    #[test]
    fn test_rejects_empty_tables_and_tokens() {
        let empty: Vec<(String, String)> = Vec::new();
        assert!(Replacements::new(empty).is_err());
        assert!(Replacements::new([("", "value")]).is_err());
    }

    #[test]
    fn test_from_settings_uses_fixed_tokens() {
        let settings = BuildSettings {
            url: "https://x.test".to_string(),
            key: "abc123".to_string(),
            ..BuildSettings::default()
        };
        let replacements = Replacements::from_settings(&settings).unwrap();
        assert_eq!(
            replacements.pairs(),
            &[
                (URL_TOKEN.to_string(), "https://x.test".to_string()),
                (KEY_TOKEN.to_string(), "abc123".to_string()),
            ]
        );
    }
}
