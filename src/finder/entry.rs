//! 候选条目
//!
//! 扫描得到的每个路径都包装为一个 [`Entry`]，
//! 过滤器通过它按需读取修改时间、大小、类型和 MIME 类型。

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;
use log::debug;
use walkdir::WalkDir;

use crate::errors::{FindError, FindResult};
use super::mime;

/// 扫描结果中的一个候选路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 相对于扫描根目录的路径，使用 `/` 分隔
    relative: String,
    /// 文件系统中的完整路径
    path: PathBuf,
    /// 递归计算大小时是否跟随符号链接
    follow_links: bool,
}

impl Entry {
    /// 由扫描根目录和完整路径创建条目
    pub fn new(root: &Path, path: PathBuf) -> Self {
        let relative = match path.strip_prefix(root) {
            Ok(rel) => relative_string(rel),
            Err(_) => relative_string(&path),
        };
        Self {
            relative,
            path,
            follow_links: false,
        }
    }

    /// 设置递归计算大小时是否跟随符号链接（与扫描选项一致）
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// 相对路径
    pub fn relative(&self) -> &str {
        &self.relative
    }

    /// 完整路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 文件名（最后一个路径分量）
    pub fn basename(&self) -> &str {
        self.relative.rsplit('/').next().unwrap_or(&self.relative)
    }

    /// 父目录的名称；顶层条目返回扫描根目录自身的名称
    pub fn dirname(&self) -> Option<String> {
        self.path
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// 最后修改时间（跟随符号链接）
    pub fn modified(&self) -> FindResult<SystemTime> {
        fs::metadata(&self.path)
            .and_then(|metadata| metadata.modified())
            .map_err(|err| FindError::unreadable(&self.path, err))
    }

    /// 条目大小（字节）；`recursive` 时目录大小为其下所有普通文件之和
    ///
    /// 条目本身总是跟随符号链接；目录内部的符号链接只有在
    /// `follow_links` 时才计入。无法读取的子条目被跳过，
    /// 只有条目本身无法读取时才返回 `EntryUnreadable`。
    pub fn size(&self, recursive: bool) -> FindResult<u64> {
        let metadata = fs::metadata(&self.path).map_err(|err| FindError::unreadable(&self.path, err))?;
        if !(recursive && metadata.is_dir()) {
            return Ok(metadata.len());
        }

        let mut total = 0;
        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .follow_links(self.follow_links);
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("计算 {} 大小时跳过: {}", self.relative, err);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            match entry.metadata() {
                Ok(metadata) => total += metadata.len(),
                Err(err) => debug!("计算 {} 大小时跳过: {}", self.relative, err),
            }
        }
        Ok(total)
    }

    /// 是否为普通文件（跟随符号链接）
    pub fn is_file(&self) -> bool {
        self.path.is_file()
    }

    /// 是否为目录（跟随符号链接）
    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }

    /// 条目本身是否为符号链接
    pub fn is_symlink(&self) -> bool {
        fs::symlink_metadata(&self.path)
            .map(|metadata| metadata.file_type().is_symlink())
            .unwrap_or(false)
    }

    /// 解析所有符号链接后的真实路径
    pub fn real_path(&self) -> FindResult<PathBuf> {
        fs::canonicalize(&self.path).map_err(|err| FindError::unreadable(&self.path, err))
    }

    /// 检测真实路径的 MIME 类型
    pub fn mime_type(&self) -> FindResult<String> {
        let real_path = self.real_path()?;
        mime::detect(&real_path).map_err(|err| FindError::unreadable(&real_path, err))
    }
}

/// 将路径转换为以 `/` 分隔的字符串，忽略根和前缀分量
fn relative_string(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::CurDir | Component::ParentDir => Some(component.as_os_str().to_string_lossy()),
            Component::RootDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
