//! 用于查找文件和目录的库
//!
//! 本库先递归扫描一个根目录，再通过链式调用逐步缩小结果集，支持：
//! - 修改时间、大小（目录按递归大小）
//! - 正则表达式、后缀、路径前缀、父目录名、文件名前缀
//! - 文件类型（文件、目录、符号链接）和 MIME 类型
//! - 自定义过滤器
//!
//! 扫描失败时查找器保持为空，后续过滤均为空操作；
//! 扫描后无法读取的条目会被直接排除。
//!
//! # 示例
//!
//! ```no_run
//! use fluent_find::finder::{Finder, SizeMode};
//!
//! let results = Finder::new()
//!     .seed("./data")
//!     .size_filter(20, SizeMode::Smaller)
//!     .has_suffix(".txt")
//!     .results();
//!
//! for path in results {
//!     println!("找到文件: {}", path);
//! }
//! ```
//!
//! 无效的正则表达式会中止调用链：
//!
//! ```
//! use fluent_find::{Finder, FindError};
//!
//! let result = Finder::new().matches_regex("(");
//! assert!(matches!(result, Err(FindError::PatternError { .. })));
//! ```

pub mod cli;
pub mod errors;
pub mod finder;

// Re-export main types for convenience
pub use errors::{FindError, FindResult};
pub use finder::{Finder, SizeMode};
