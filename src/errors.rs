use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for operations that can produce FindError
pub type FindResult<T> = Result<T, FindError>;

/// fluent-find 的自定义错误类型
#[derive(Debug, Error)]
pub enum FindError {
    /// 文件未找到
    #[error("文件未找到: {}", .0.display())]
    FileNotFound(PathBuf),

    /// 权限不足
    #[error("权限不足: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// 文件系统错误（其他IO错误）
    #[error("文件系统错误 {}: {source}", .path.display())]
    FilesystemError {
        source: io::Error,
        path: PathBuf,
    },

    /// 指定的路径无效（不是目录）
    #[error("无效路径: {}", .0.display())]
    InvalidPath(PathBuf),

    /// 扫描之后条目不可读（已删除或无权限）
    #[error("条目不可读 {}: {source}", .path.display())]
    EntryUnreadable {
        source: io::Error,
        path: PathBuf,
    },

    /// 其他通用错误
    #[error("错误: {message}{}", .context.as_ref().map(|ctx| format!(" (上下文: {})", ctx)).unwrap_or_default())]
    Other {
        message: String,
        context: Option<String>,
    },

    /// 模式匹配错误
    #[error("模式匹配错误: {message}")]
    PatternError {
        message: String,
    },

    /// 无效的文件类型
    #[error("无效的文件类型: {0}")]
    InvalidFileType(String),

    /// 遍历目录时的错误
    #[error("目录遍历错误: {0}")]
    WalkDirError(String),
}

impl FindError {
    /// 为扫描后无法读取的条目构造错误
    pub fn unreadable(path: &Path, source: io::Error) -> Self {
        FindError::EntryUnreadable {
            source,
            path: path.to_path_buf(),
        }
    }

    /// 根据 IO 错误类型构造扫描错误
    pub fn scan(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FindError::FileNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FindError::PermissionDenied(path.to_path_buf()),
            _ => FindError::FilesystemError {
                source: err,
                path: path.to_path_buf(),
            },
        }
    }
}

impl From<walkdir::Error> for FindError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        match err.io_error() {
            Some(io_err) => match io_err.kind() {
                io::ErrorKind::NotFound => FindError::FileNotFound(path),
                io::ErrorKind::PermissionDenied => FindError::PermissionDenied(path),
                _ => FindError::FilesystemError {
                    source: io::Error::new(io_err.kind(), io_err.to_string()),
                    path,
                },
            },
            None => FindError::WalkDirError(err.to_string()),
        }
    }
}

impl From<regex::Error> for FindError {
    fn from(err: regex::Error) -> Self {
        FindError::PatternError {
            message: err.to_string(),
        }
    }
}
