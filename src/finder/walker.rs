//! 文件系统遍历功能
//!
//! 本模块递归扫描根目录，按扫描顺序收集候选条目。

use std::fs;
use std::path::Path;
use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::errors::{FindError, FindResult};
use super::entry::Entry;
use super::options::FindOptions;

/// 使用给定选项处理文件系统遍历
pub struct FileWalker<'a> {
    options: &'a FindOptions,
}

impl<'a> FileWalker<'a> {
    /// 使用给定选项创建新的 FileWalker
    pub fn new(options: &'a FindOptions) -> Self {
        Self { options }
    }

    /// 从给定路径开始遍历文件系统，根目录本身不包含在结果中
    pub fn walk<P: AsRef<Path>>(&self, path: P) -> FindResult<Vec<Entry>> {
        let path = path.as_ref();
        let root = fs::canonicalize(path).map_err(|err| FindError::scan(path, err))?;
        if !root.is_dir() {
            return Err(FindError::InvalidPath(path.to_path_buf()));
        }
        // 根目录不可读时总是报错，不受 ignore_permission_errors 影响
        fs::read_dir(&root).map_err(|err| FindError::scan(path, err))?;

        debug!("扫描根目录: {}", root.display());
        let mut entries = Vec::new();
        for entry in self.init_walker(&root) {
            if let Some(entry) = self.process_entry(entry)? {
                entries.push(Entry::new(&root, entry.into_path()).with_follow_links(self.options.follow_links));
            }
        }

        Ok(entries)
    }

    /// 使用配置的选项初始化目录遍历器
    fn init_walker(&self, root: &Path) -> WalkDir {
        let mut walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.options.follow_links);

        if let Some(depth) = self.options.max_depth {
            walker = walker.max_depth(depth);
        }
        if self.options.sort_entries {
            walker = walker.sort_by_file_name();
        }

        walker
    }

    /// 处理单个目录条目
    fn process_entry(&self, entry: Result<DirEntry, walkdir::Error>) -> FindResult<Option<DirEntry>> {
        match entry {
            Ok(entry) => Ok(Some(entry)),
            Err(err) => self.handle_walk_error(err),
        }
    }

    /// 根据选项处理目录遍历错误
    fn handle_walk_error(&self, err: walkdir::Error) -> FindResult<Option<DirEntry>> {
        let permission_denied = err
            .io_error()
            .map(|io_err| io_err.kind() == std::io::ErrorKind::PermissionDenied)
            .unwrap_or(false);

        if permission_denied && self.options.ignore_permission_errors {
            warn!("跳过无权限访问的路径: {}", err.path().unwrap_or(Path::new("")).display());
            return Ok(None);
        }
        if !permission_denied && self.options.ignore_io_errors {
            warn!("跳过遍历错误: {}", err);
            return Ok(None);
        }

        Err(err.into())
    }
}
