use std::fs;
use std::path::{Component, Path, PathBuf};

/// Whether `destination` lies strictly inside `source`
///
/// Both paths are made absolute and compared component-wise. An equal path
/// or an ancestor destination is not an overlap: the walk only descends the
/// source, so neither can feed its own output back in.
pub(crate) fn is_overlap(source: &Path, destination: &Path) -> bool {
    let source = resolve_path(source);
    let destination = resolve_path(destination);
    destination.starts_with(&source) && destination != source
}

/// The final component of a path, for progress lines
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn resolve_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    let absolute = lexical_normalise(&absolute);

    // Canonicalise the deepest existing ancestor so symlinked prefixes agree
    for ancestor in absolute.ancestors() {
        if let Ok(resolved) = fs::canonicalize(ancestor) {
            let rest = absolute.strip_prefix(ancestor).unwrap_or(Path::new(""));
            return if rest.as_os_str().is_empty() {
                resolved
            } else {
                resolved.join(rest)
            };
        }
    }
    absolute
}

fn lexical_normalise(path: &Path) -> PathBuf {
    let mut normalised = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalised.pop();
            }
            other => normalised.push(other.as_os_str()),
        }
    }
    normalised
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_destination_overlaps() {
        assert!(is_overlap(Path::new("/srv/public"), Path::new("/srv/public/dist")));
        assert!(is_overlap(Path::new("/srv/public"), Path::new("/srv/public/a/b")));
    }

    #[test]
    fn test_ancestor_or_same_destination_does_not_overlap() {
        assert!(!is_overlap(Path::new("/srv/public/assets"), Path::new("/srv/public")));
        assert!(!is_overlap(Path::new("/srv/public"), Path::new("/srv/public")));
        assert!(!is_overlap(Path::new("/srv/public"), Path::new("/srv/./public/")));
    }

    #[test]
    fn test_siblings_do_not_overlap() {
        assert!(!is_overlap(Path::new("/srv/public"), Path::new("/srv/dist")));
        // Prefix of a name is not containment
        assert!(!is_overlap(Path::new("/srv/public"), Path::new("/srv/public2")));
    }

    #[test]
    fn test_dot_segments_are_resolved() {
        assert!(is_overlap(
            Path::new("/srv/public"),
            Path::new("/srv/dist/../public/out")
        ));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/srv/public/index.html")), "index.html");
        assert_eq!(display_name(Path::new("/")), "/");
    }
}
