//! Path deserialization helpers
//!
//! Configuration paths can be written either as a single string or as a list
//! of segments, which keeps configuration files portable between platforms.

use std::path::PathBuf;

use serde::Deserialize;
use shellexpand::tilde;

/// Accepts `"a/b"` or `["a", "b"]`, expanding a leading `~`
pub fn deserialize_optional_path<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<PathBuf>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPath {
        Single(String),
        Segments(Vec<String>),
    }

    let raw = Option::<RawPath>::deserialize(deserializer)?;
    Ok(raw.map(|raw| match raw {
        RawPath::Single(path) => PathBuf::from(expand_path(&path)),
        RawPath::Segments(segments) => {
            let mut path = PathBuf::new();
            for (index, segment) in segments.iter().enumerate() {
                if index == 0 {
                    path.push(expand_path(segment));
                } else {
                    path.push(segment);
                }
            }
            path
        }
    }))
}

/// Expands a leading `~` to the user's home directory
pub fn expand_path(path: &str) -> String {
    tilde(path).to_string()
}
