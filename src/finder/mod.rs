//! 文件查找模块
//!
//! [`Finder`] 先通过一次递归扫描收集候选条目，再依次登记过滤条件，
//! 最终在 [`Finder::results`] 中按登记顺序对每个条目求值。
//! 过滤只会缩小结果集，且保持扫描顺序。

pub mod entry;
pub mod filter;
pub mod mime;
pub mod options;
pub mod walker;

use std::fmt;
use std::path::Path;
use std::time::SystemTime;
use log::{debug, info, warn};

use crate::errors::{FindError, FindResult};
pub use self::entry::Entry;
pub use self::filter::{FileFilter, FileType, SizeMode};
pub use self::options::FindOptions;
use self::filter::{
    DirnameFilter, FilenamePrefixFilter, MimeTypeFilter, ModifiedBeforeFilter, PathPrefixFilter,
    RegexFilter, SizeFilter, SuffixFilter, TypeFilter,
};
use self::walker::FileWalker;

/// 文件查找器
///
/// 每个过滤方法都会消耗并返回查找器本身，便于链式调用：
///
/// ```no_run
/// use fluent_find::finder::{Finder, SizeMode};
///
/// let found = Finder::new()
///     .seed("./logs")
///     .size_filter(1024, SizeMode::Larger)
///     .has_suffix(".log")
///     .results();
/// ```
pub struct Finder {
    options: FindOptions,
    entries: Vec<Entry>,
    filters: Vec<Box<dyn FileFilter + Send + Sync>>,
    seed_error: Option<FindError>,
}

impl Finder {
    /// 创建使用默认选项的空查找器
    pub fn new() -> Self {
        Self::with_options(FindOptions::default())
    }

    /// 创建使用指定扫描选项的空查找器
    pub fn with_options(options: FindOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
            filters: Vec::new(),
            seed_error: None,
        }
    }

    /// 递归扫描 `root`，替换现有的候选集合和已登记的过滤器
    ///
    /// 扫描失败不会向调用方传播：错误被记录并可通过 [`Finder::seed_error`] 读取，
    /// 候选集合保持为空。
    pub fn seed<P: AsRef<Path>>(mut self, root: P) -> Self {
        let root = root.as_ref();
        self.entries.clear();
        self.filters.clear();
        self.seed_error = None;

        match FileWalker::new(&self.options).walk(root) {
            Ok(entries) => {
                info!("在 {} 中扫描到 {} 个条目", root.display(), entries.len());
                self.entries = entries;
            }
            Err(err) => {
                warn!("无法扫描 {}: {}", root.display(), err);
                self.seed_error = Some(err);
            }
        }

        self
    }

    /// 与 [`Finder::seed`] 相同，但扫描失败时返回错误
    pub fn try_seed<P: AsRef<Path>>(self, root: P) -> FindResult<Self> {
        let mut finder = self.seed(root);
        match finder.seed_error.take() {
            Some(err) => Err(err),
            None => Ok(finder),
        }
    }

    /// 最近一次扫描的错误
    pub fn seed_error(&self) -> Option<&FindError> {
        self.seed_error.as_ref()
    }

    /// 添加过滤器
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: FileFilter + Send + Sync + 'static,
    {
        debug!("添加过滤器: {}", filter.description());
        self.filters.push(Box::new(filter));
        self
    }

    /// 保留最后修改时间不晚于 `time` 的条目
    pub fn modified_before(self, time: SystemTime) -> Self {
        self.with_filter(ModifiedBeforeFilter::new(time))
    }

    /// 按大小过滤（边界包含在内，目录按递归大小计算）
    pub fn size_filter(self, size: u64, mode: SizeMode) -> Self {
        self.with_filter(SizeFilter::new(size, mode))
    }

    /// 保留相对路径匹配正则表达式的条目；无效的表达式立即返回错误
    pub fn matches_regex(self, pattern: &str) -> FindResult<Self> {
        Ok(self.with_filter(RegexFilter::new(pattern)?))
    }

    /// 保留以 `suffix` 结尾的条目
    pub fn has_suffix(self, suffix: &str) -> Self {
        self.has_suffixes([suffix])
    }

    /// 保留以列表中每一个后缀结尾的条目
    pub fn has_suffixes<I, S>(self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_filter(SuffixFilter::new(suffixes))
    }

    /// 只保留普通文件
    pub fn is_file(self) -> Self {
        self.with_filter(TypeFilter::from(FileType::File))
    }

    /// 只保留目录
    pub fn is_directory(self) -> Self {
        self.with_filter(TypeFilter::from(FileType::Directory))
    }

    /// 只保留符号链接
    pub fn is_link(self) -> Self {
        self.with_filter(TypeFilter::from(FileType::SymbolicLink))
    }

    /// 保留父目录名称等于 `dir` 的条目
    pub fn has_dirname(self, dir: &str) -> Self {
        self.with_filter(DirnameFilter::new(dir))
    }

    /// 保留位于 `path` 之下的条目（忽略 `path` 开头的分隔符）
    pub fn under_path(self, path: &str) -> Self {
        self.with_filter(PathPrefixFilter::new(path))
    }

    /// 保留文件名以 `name` 开头的条目
    pub fn has_filename_prefix(self, name: &str) -> Self {
        self.with_filter(FilenamePrefixFilter::new(name))
    }

    /// 保留 MIME 类型等于 `mime` 的条目
    pub fn has_mimetype(self, mime: &str) -> Self {
        self.with_filter(MimeTypeFilter::new(mime))
    }

    /// 已登记过滤器的描述，按登记顺序
    pub fn filter_descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|filter| filter.description()).collect()
    }

    /// 求值并返回通过所有过滤器的相对路径，保持扫描顺序
    pub fn results(&self) -> Vec<String> {
        let results: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| self.accepts(entry))
            .map(|entry| entry.relative().trim_start_matches(std::path::is_separator).to_string())
            .collect();

        debug!(
            "{} 个过滤器保留了 {}/{} 个条目",
            self.filters.len(),
            results.len(),
            self.entries.len()
        );
        results
    }

    /// 依次应用过滤器；无法读取的条目视为不匹配
    fn accepts(&self, entry: &Entry) -> bool {
        for filter in &self.filters {
            match filter.matches(entry) {
                Ok(true) => {}
                Ok(false) => return false,
                Err(err) => {
                    debug!("跳过条目 {} ({}): {}", entry.relative(), filter.description(), err);
                    return false;
                }
            }
        }
        true
    }
}

impl Default for Finder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Finder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Finder")
            .field("options", &self.options)
            .field("entries", &self.entries.len())
            .field("filters", &self.filter_descriptions())
            .field("seed_error", &self.seed_error)
            .finish()
    }
}
