use crate::error::{ConvertError, ConvertResult};
use globset::{Glob, GlobMatcher};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File name pattern of SystemeHD exports
pub const DEFAULT_BATCH_PATTERN: &str = "*.xls";

/// Where and what to convert in batch mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    pub root: PathBuf,
    /// Glob matched against file names only
    pub pattern: String,
}

impl BatchOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pattern: DEFAULT_BATCH_PATTERN.to_string(),
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    fn matcher(&self) -> ConvertResult<GlobMatcher> {
        Glob::new(&self.pattern)
            .map(|glob| glob.compile_matcher())
            .map_err(|e| {
                ConvertError::InvalidArguments(format!("bad batch pattern '{}': {}", self.pattern, e))
            })
    }
}

/// Outcome of a batch run. Failures never stop the run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<PathBuf>,
    /// Each entry is a `ConvertError::Batch` naming the file
    pub failed: Vec<ConvertError>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}

/// Recursively find files under the root whose name matches the pattern,
/// sorted by path. Unreadable directory entries are skipped.
pub fn discover(options: &BatchOptions) -> ConvertResult<Vec<PathBuf>> {
    let matcher = options.matcher()?;

    let mut files: Vec<PathBuf> = WalkDir::new(&options.root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| matcher.is_match(Path::new(entry.file_name())))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    debug!(root = %options.root.display(), found = files.len(), "batch discovery");
    Ok(files)
}

/// Run `convert` on every discovered file. Discovery finishes before the
/// first conversion, so files written by `convert` are never picked up.
pub fn run_batch<F>(options: &BatchOptions, mut convert: F) -> ConvertResult<BatchReport>
where
    F: FnMut(&Path) -> ConvertResult<()>,
{
    let mut report = BatchReport::default();
    for path in discover(options)? {
        match convert(&path) {
            Ok(()) => report.converted.push(path),
            Err(source) => {
                let err = ConvertError::Batch {
                    path,
                    source: Box::new(source),
                };
                warn!(%err, "batch item failed");
                report.failed.push(err);
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_discover_recurses_and_matches_names() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("a.xls"));
        touch(&root.join("site/b.xls"));
        touch(&root.join("site/deep/c.xls"));
        touch(&root.join("site/c.xlsx"));
        touch(&root.join("notes.txt"));

        let files = discover(&BatchOptions::new(root)).unwrap();

        assert_eq!(
            files,
            vec![
                root.join("a.xls"),
                root.join("site/b.xls"),
                root.join("site/deep/c.xls"),
            ]
        );
    }

    #[test]
    fn test_discover_custom_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("a.xls"));
        touch(&root.join("b.xlsx"));

        let files = discover(&BatchOptions::new(root).with_pattern("*.xlsx")).unwrap();
        assert_eq!(files, vec![root.join("b.xlsx")]);
    }

    #[test]
    fn test_discover_bad_pattern() {
        let result = discover(&BatchOptions::new(".").with_pattern("[unclosed"));
        assert!(matches!(result, Err(ConvertError::InvalidArguments(_))));
    }

    #[test]
    fn test_discover_missing_root_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let files = discover(&BatchOptions::new(temp_dir.path().join("absent"))).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_run_batch_continues_after_failure() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("1.xls"));
        touch(&root.join("2.xls"));
        touch(&root.join("3.xls"));

        let mut seen = Vec::new();
        let report = run_batch(&BatchOptions::new(root), |path| {
            seen.push(path.to_path_buf());
            if path.ends_with("2.xls") {
                Err(ConvertError::Export("boom".to_string()))
            } else {
                Ok(())
            }
        })
        .unwrap();

        assert_eq!(seen.len(), 3);
        assert_eq!(report.total(), 3);
        assert_eq!(report.converted, vec![root.join("1.xls"), root.join("3.xls")]);
        assert_eq!(report.failed.len(), 1);
        let msg = report.failed[0].to_string();
        assert!(msg.contains("2.xls"));
        assert!(msg.contains("boom"));
    }
}
