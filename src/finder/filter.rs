//! Candidate filtering functionality
//!
//! This module provides the predicates a [`Finder`](super::Finder) applies to
//! its candidates. Each filter answers keep/drop for a single entry.

use std::time::SystemTime;
use regex::Regex;

use super::entry::Entry;
use crate::errors::{FindError, FindResult};

/// Trait for candidate filters
pub trait FileFilter {
    /// Check if the entry should be kept.
    ///
    /// An `Err` means the entry could not be inspected; the finder drops it.
    fn matches(&self, entry: &Entry) -> FindResult<bool>;

    /// Get the filter description
    fn description(&self) -> String;
}

/// Keeps entries last modified at or before a point in time
pub struct ModifiedBeforeFilter {
    time: SystemTime,
}

impl ModifiedBeforeFilter {
    pub fn new(time: SystemTime) -> Self {
        Self { time }
    }
}

impl FileFilter for ModifiedBeforeFilter {
    fn matches(&self, entry: &Entry) -> FindResult<bool> {
        Ok(entry.modified()? <= self.time)
    }

    fn description(&self) -> String {
        let secs = self
            .time
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format!("modified at or before {}", secs)
    }
}

/// Direction of a size bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMode {
    /// Keep entries not larger than the bound
    #[default]
    Smaller,
    /// Keep entries not smaller than the bound
    Larger,
}

/// Keeps entries on one side of a size bound (inclusive).
/// Directories are measured recursively.
pub struct SizeFilter {
    size: u64,
    mode: SizeMode,
}

impl SizeFilter {
    pub fn new(size: u64, mode: SizeMode) -> Self {
        Self { size, mode }
    }
}

impl FileFilter for SizeFilter {
    fn matches(&self, entry: &Entry) -> FindResult<bool> {
        let size = entry.size(true)?;
        Ok(match self.mode {
            SizeMode::Smaller => size <= self.size,
            SizeMode::Larger => size >= self.size,
        })
    }

    fn description(&self) -> String {
        match self.mode {
            SizeMode::Smaller => format!("size <= {} bytes", self.size),
            SizeMode::Larger => format!("size >= {} bytes", self.size),
        }
    }
}

/// Filter for matching the relative path against a regular expression
pub struct RegexFilter {
    regex: Regex,
}

impl RegexFilter {
    /// Compile the pattern; a malformed pattern is a `PatternError`
    pub fn new(pattern: &str) -> FindResult<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl FileFilter for RegexFilter {
    fn matches(&self, entry: &Entry) -> FindResult<bool> {
        Ok(self.regex.is_match(entry.relative()))
    }

    fn description(&self) -> String {
        format!("path matches /{}/", self.regex.as_str())
    }
}

/// Filter for path suffixes.
///
/// Every suffix must end the path (AND logic), so only a single suffix is
/// useful in practice. An empty list keeps everything.
pub struct SuffixFilter {
    suffixes: Vec<String>,
}

impl SuffixFilter {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }
}

impl FileFilter for SuffixFilter {
    fn matches(&self, entry: &Entry) -> FindResult<bool> {
        let path = entry.relative();
        Ok(self.suffixes.iter().all(|suffix| path.ends_with(suffix.as_str())))
    }

    fn description(&self) -> String {
        format!("path ends with all of [{}]", self.suffixes.join(", "))
    }
}

/// Filter for matching file types
pub struct TypeFilter {
    file_type: FileType,
}

/// Supported file types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileType {
    /// Regular file
    File,
    /// Directory
    Directory,
    /// Symbolic link
    SymbolicLink,
}

impl TypeFilter {
    /// Create a new TypeFilter with the given type code
    pub fn new(type_code: &str) -> Result<Self, FindError> {
        let file_type = match type_code {
            "f" => FileType::File,
            "d" => FileType::Directory,
            "l" => FileType::SymbolicLink,
            _ => return Err(FindError::InvalidFileType(type_code.to_string())),
        };

        Ok(Self { file_type })
    }
}

impl From<FileType> for TypeFilter {
    fn from(file_type: FileType) -> Self {
        Self { file_type }
    }
}

impl FileFilter for TypeFilter {
    fn matches(&self, entry: &Entry) -> FindResult<bool> {
        Ok(match self.file_type {
            FileType::File => entry.is_file(),
            FileType::Directory => entry.is_dir(),
            FileType::SymbolicLink => entry.is_symlink(),
        })
    }

    fn description(&self) -> String {
        match self.file_type {
            FileType::File => "is a regular file".to_string(),
            FileType::Directory => "is a directory".to_string(),
            FileType::SymbolicLink => "is a symbolic link".to_string(),
        }
    }
}

/// Keeps entries whose parent directory has exactly this name
pub struct DirnameFilter {
    name: String,
}

impl DirnameFilter {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}

impl FileFilter for DirnameFilter {
    fn matches(&self, entry: &Entry) -> FindResult<bool> {
        Ok(entry.dirname().as_deref() == Some(self.name.as_str()))
    }

    fn description(&self) -> String {
        format!("parent directory is '{}'", self.name)
    }
}

/// Keeps entries whose relative path starts with a prefix.
/// Leading separators of the prefix are ignored.
pub struct PathPrefixFilter {
    prefix: String,
}

impl PathPrefixFilter {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim_start_matches(std::path::is_separator).to_string(),
        }
    }
}

impl FileFilter for PathPrefixFilter {
    fn matches(&self, entry: &Entry) -> FindResult<bool> {
        Ok(entry.relative().starts_with(self.prefix.as_str()))
    }

    fn description(&self) -> String {
        format!("path starts with '{}'", self.prefix)
    }
}

/// Keeps entries whose file name starts with a prefix
pub struct FilenamePrefixFilter {
    prefix: String,
}

impl FilenamePrefixFilter {
    pub fn new(prefix: &str) -> Self {
        Self { prefix: prefix.to_string() }
    }
}

impl FileFilter for FilenamePrefixFilter {
    fn matches(&self, entry: &Entry) -> FindResult<bool> {
        Ok(entry.basename().starts_with(self.prefix.as_str()))
    }

    fn description(&self) -> String {
        format!("name starts with '{}'", self.prefix)
    }
}

/// Keeps entries whose detected MIME type is exactly `mime`
pub struct MimeTypeFilter {
    mime: String,
}

impl MimeTypeFilter {
    pub fn new(mime: &str) -> Self {
        Self { mime: mime.to_string() }
    }
}

impl FileFilter for MimeTypeFilter {
    fn matches(&self, entry: &Entry) -> FindResult<bool> {
        Ok(entry.mime_type()? == self.mime)
    }

    fn description(&self) -> String {
        format!("mimetype is '{}'", self.mime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::path::Path;
    use std::time::Duration;
    use tempfile::TempDir;

    fn create_test_entry(name: &str) -> Result<(TempDir, Entry), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        File::create(&file_path)?.write_all(b"test")?;

        let entry = Entry::new(temp_dir.path(), file_path);
        Ok((temp_dir, entry))
    }

    #[test]
    fn test_regex_filter() -> Result<(), Box<dyn std::error::Error>> {
        let (_temp_dir, entry) = create_test_entry("logs/app.json")?;

        assert!(RegexFilter::new(r"\.json$")?.matches(&entry)?);
        assert!(RegexFilter::new(r"^logs/")?.matches(&entry)?);
        assert!(!RegexFilter::new(r"\.txt$")?.matches(&entry)?);

        Ok(())
    }

    #[test]
    fn test_regex_filter_invalid_pattern() {
        let result = RegexFilter::new("(unclosed");
        assert!(matches!(result, Err(FindError::PatternError { .. })));
    }

    #[test]
    fn test_suffix_filter() -> Result<(), Box<dyn std::error::Error>> {
        let (_temp_dir, entry) = create_test_entry("archive.tar.gz")?;

        assert!(SuffixFilter::new([".gz"]).matches(&entry)?);
        assert!(SuffixFilter::new([".tar.gz", ".gz"]).matches(&entry)?);
        assert!(!SuffixFilter::new([".gz", ".zip"]).matches(&entry)?);
        assert!(SuffixFilter::new(Vec::<String>::new()).matches(&entry)?);

        Ok(())
    }

    #[test]
    fn test_size_filter_inclusive_bounds() -> Result<(), Box<dyn std::error::Error>> {
        let (_temp_dir, entry) = create_test_entry("four.bin")?;

        assert!(SizeFilter::new(4, SizeMode::Smaller).matches(&entry)?);
        assert!(SizeFilter::new(4, SizeMode::Larger).matches(&entry)?);
        assert!(!SizeFilter::new(3, SizeMode::Smaller).matches(&entry)?);
        assert!(!SizeFilter::new(5, SizeMode::Larger).matches(&entry)?);
        assert_eq!(SizeMode::default(), SizeMode::Smaller);

        Ok(())
    }

    #[test]
    fn test_modified_before_filter() -> Result<(), Box<dyn std::error::Error>> {
        let (_temp_dir, entry) = create_test_entry("old.txt")?;
        let past = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        File::options().write(true).open(entry.path())?.set_modified(past)?;

        assert!(ModifiedBeforeFilter::new(past).matches(&entry)?);
        assert!(!ModifiedBeforeFilter::new(past - Duration::from_secs(1)).matches(&entry)?);

        Ok(())
    }

    #[test]
    fn test_type_filter() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("test.txt");
        File::create(&file_path)?.write_all(b"test")?;
        let dir_path = temp_dir.path().join("testdir");
        std::fs::create_dir(&dir_path)?;

        let file_entry = Entry::new(temp_dir.path(), file_path);
        let dir_entry = Entry::new(temp_dir.path(), dir_path);

        let file_filter = TypeFilter::new("f")?;
        assert!(file_filter.matches(&file_entry)?);
        assert!(!file_filter.matches(&dir_entry)?);

        let dir_filter = TypeFilter::from(FileType::Directory);
        assert!(!dir_filter.matches(&file_entry)?);
        assert!(dir_filter.matches(&dir_entry)?);

        assert!(matches!(TypeFilter::new("x"), Err(FindError::InvalidFileType(_))));

        Ok(())
    }

    #[test]
    fn test_name_filters() -> Result<(), Box<dyn std::error::Error>> {
        let (_temp_dir, entry) = create_test_entry("logs/app-2024.log")?;

        assert!(DirnameFilter::new("logs").matches(&entry)?);
        assert!(!DirnameFilter::new("log").matches(&entry)?);

        assert!(FilenamePrefixFilter::new("app").matches(&entry)?);
        assert!(!FilenamePrefixFilter::new("logs").matches(&entry)?);

        assert!(PathPrefixFilter::new("/logs").matches(&entry)?);
        assert!(PathPrefixFilter::new("logs/app").matches(&entry)?);
        assert!(!PathPrefixFilter::new("data").matches(&entry)?);

        Ok(())
    }

    #[test]
    fn test_mimetype_filter() -> Result<(), Box<dyn std::error::Error>> {
        let (_temp_dir, entry) = create_test_entry("readme")?;
        assert!(MimeTypeFilter::new("text/plain").matches(&entry)?);
        assert!(!MimeTypeFilter::new("image/png").matches(&entry)?);

        let missing = Entry::new(Path::new("/"), "/no/such/file".into());
        assert!(MimeTypeFilter::new("text/plain").matches(&missing).is_err());

        Ok(())
    }
}
