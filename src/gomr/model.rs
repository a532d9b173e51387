use crate::error::{GomrError, Result};
use std::path::{Path, PathBuf};

/// One tracked replace directive: `name` is redirected to the local `path`.
///
/// `synthetic` marks records whose target directory had no `go.mod` when the
/// replace was added; gomr created a placeholder there and owns removing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceRecord {
    pub name: String,
    pub path: PathBuf,
    pub synthetic: bool,
}

/// Marker prefixed to the path field of synthetic records in the store file.
const SYNTHETIC_MARKER: char = '!';

impl ReplaceRecord {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, synthetic: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            synthetic,
        }
    }

    /// Case-insensitive name match, the lookup rule for `remove`. Folding is
    /// ASCII-only; Go module paths are restricted to ASCII anyway.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Rejects fields the store format cannot round-trip. Lines are
    /// whitespace-delimited, so a name or path containing whitespace would
    /// write fine and then poison every later load; it must be refused
    /// before anything is written or any manifest is touched.
    pub fn ensure_storable(name: &str, path: &Path) -> Result<()> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(GomrError::UnstorableField {
                field: "name",
                value: name.to_string(),
            });
        }
        let raw = path.to_string_lossy();
        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            return Err(GomrError::UnstorableField {
                field: "path",
                value: raw.into_owned(),
            });
        }
        Ok(())
    }

    /// Encodes the record as one store-file line (without trailing newline):
    /// `<name> <path>`, with a `!` prefix on the path for synthetic records.
    pub fn encode(&self) -> String {
        if self.synthetic {
            format!("{} {}{}", self.name, SYNTHETIC_MARKER, self.path.display())
        } else {
            format!("{} {}", self.name, self.path.display())
        }
    }

    /// Decodes one store-file line. `line_no` is 1-based, for diagnostics.
    ///
    /// The format is two whitespace-delimited fields; anything else is a
    /// parse error rather than a silent skip, because a line that doesn't
    /// round-trip would desynchronize the store from the manifest.
    pub fn decode(store_path: &Path, line_no: usize, line: &str) -> Result<Self> {
        let mut fields = line.split_whitespace();
        let (Some(name), Some(raw_path), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(GomrError::StoreParse {
                path: store_path.to_path_buf(),
                line: line_no,
            });
        };

        let (path, synthetic) = match raw_path.strip_prefix(SYNTHETIC_MARKER) {
            Some(stripped) => (stripped, true),
            None => (raw_path, false),
        };

        Ok(Self::new(name, path, synthetic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> PathBuf {
        PathBuf::from("/tmp/.gomr")
    }

    #[test]
    fn encodes_plain_record() {
        let r = ReplaceRecord::new("github.com/foo/bar", "/home/me/bar", false);
        assert_eq!(r.encode(), "github.com/foo/bar /home/me/bar");
    }

    #[test]
    fn encodes_synthetic_record_with_marker() {
        let r = ReplaceRecord::new("github.com/foo/bar", "/home/me/bar", true);
        assert_eq!(r.encode(), "github.com/foo/bar !/home/me/bar");
    }

    #[test]
    fn decodes_plain_record() {
        let r = ReplaceRecord::decode(&store(), 1, "github.com/foo/bar /home/me/bar").unwrap();
        assert_eq!(r, ReplaceRecord::new("github.com/foo/bar", "/home/me/bar", false));
    }

    #[test]
    fn decodes_synthetic_record() {
        let r = ReplaceRecord::decode(&store(), 1, "github.com/foo/bar !/home/me/bar").unwrap();
        assert_eq!(r, ReplaceRecord::new("github.com/foo/bar", "/home/me/bar", true));
    }

    #[test]
    fn round_trips() {
        let original = ReplaceRecord::new("Example.com/Pkg", "/x/y/z", true);
        let parsed = ReplaceRecord::decode(&store(), 1, &original.encode()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn rejects_single_field_line() {
        let err = ReplaceRecord::decode(&store(), 3, "lonely-name").unwrap_err();
        assert!(matches!(err, GomrError::StoreParse { line: 3, .. }));
    }

    #[test]
    fn rejects_extra_fields() {
        let err = ReplaceRecord::decode(&store(), 7, "name /a/path trailing").unwrap_err();
        assert!(matches!(err, GomrError::StoreParse { line: 7, .. }));
    }

    #[test]
    fn ensure_storable_accepts_ordinary_fields() {
        ReplaceRecord::ensure_storable("github.com/foo/bar", Path::new("/home/me/bar")).unwrap();
    }

    #[test]
    fn ensure_storable_rejects_whitespace_in_path() {
        let err =
            ReplaceRecord::ensure_storable("github.com/foo/bar", Path::new("/home/my dep"))
                .unwrap_err();
        assert!(matches!(err, GomrError::UnstorableField { field: "path", .. }));
    }

    #[test]
    fn ensure_storable_rejects_whitespace_in_name() {
        let err = ReplaceRecord::ensure_storable("bad name", Path::new("/p")).unwrap_err();
        assert!(matches!(err, GomrError::UnstorableField { field: "name", .. }));
    }

    #[test]
    fn ensure_storable_rejects_empty_name() {
        let err = ReplaceRecord::ensure_storable("", Path::new("/p")).unwrap_err();
        assert!(matches!(err, GomrError::UnstorableField { field: "name", .. }));
    }

    #[test]
    fn matches_name_case_insensitively() {
        let r = ReplaceRecord::new("github.com/Foo/Bar", "/p", false);
        assert!(r.matches("github.com/foo/bar"));
        assert!(r.matches("GITHUB.COM/FOO/BAR"));
        assert!(!r.matches("github.com/foo/baz"));
    }
}
