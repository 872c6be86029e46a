//! fluent-find 的命令行接口
//!
//! 本模块提供了命令行参数解析和验证功能，
//! 并把参数转换为 [`Finder`] 的过滤链。

use std::time::{Duration, SystemTime};
use clap::Parser;
use crate::errors::{FindError, FindResult};
use crate::finder::filter::{RegexFilter, TypeFilter};
use crate::finder::options::FindOptions;
use crate::finder::{Finder, SizeMode};

/// 递归查找文件并按条件链式过滤
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 搜索路径（默认：当前目录）
    #[arg(default_value = ".")]
    pub paths: Vec<String>,

    /// 最大搜索深度
    #[arg(long, value_name = "NUM")]
    pub max_depth: Option<usize>,

    /// 跟随符号链接
    #[arg(short = 'L', long)]
    pub follow_links: bool,

    /// 启用调试日志
    #[arg(short, long)]
    pub debug: bool,

    /// 忽略IO错误（如符号链接循环等）
    #[arg(long)]
    pub ignore_io_errors: bool,

    /// 最后修改时间不晚于该时间戳（Unix 秒）
    #[arg(long, value_name = "SECS")]
    pub modified_before: Option<u64>,

    /// 大小不超过该字节数（目录按递归大小计算）
    #[arg(long, value_name = "BYTES")]
    pub smaller: Option<u64>,

    /// 大小不小于该字节数（目录按递归大小计算）
    #[arg(long, value_name = "BYTES")]
    pub larger: Option<u64>,

    /// 相对路径匹配的正则表达式
    #[arg(short = 'r', long, value_name = "PATTERN")]
    pub regex: Option<String>,

    /// 路径后缀 (可多次指定，必须全部匹配)
    #[arg(short = 's', long = "suffix", value_name = "SUFFIX")]
    pub suffixes: Vec<String>,

    /// 文件类型: f (文件), d (目录), l (符号链接)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub file_type: Option<String>,

    /// 父目录名称
    #[arg(long, value_name = "NAME")]
    pub dirname: Option<String>,

    /// 只保留该路径之下的条目
    #[arg(long, value_name = "PATH")]
    pub under: Option<String>,

    /// 文件名前缀
    #[arg(short = 'n', long, value_name = "PREFIX")]
    pub name_prefix: Option<String>,

    /// MIME 类型（如 text/plain）
    #[arg(short = 'm', long, value_name = "TYPE")]
    pub mime: Option<String>,
}

impl Cli {
    /// 验证命令行参数
    pub fn validate(&self) -> Result<(), FindError> {
        // 验证最大深度
        if let Some(depth) = self.max_depth {
            if depth == 0 {
                return Err(FindError::Other {
                    message: "Maximum depth must be greater than 0".to_string(),
                    context: Some("--max-depth".to_string()),
                });
            }
        }

        if let Some(pattern) = &self.regex {
            RegexFilter::new(pattern)?;
        }

        if let Some(code) = &self.file_type {
            TypeFilter::new(code)?;
        }

        Ok(())
    }

    /// 为给定路径构建查找器并登记所有过滤条件
    pub fn build_finder(&self, path: &str) -> FindResult<Finder> {
        let mut finder = Finder::with_options(FindOptions::from_cli(self)).seed(path);

        if let Some(secs) = self.modified_before {
            finder = finder.modified_before(SystemTime::UNIX_EPOCH + Duration::from_secs(secs));
        }
        if let Some(size) = self.smaller {
            finder = finder.size_filter(size, SizeMode::Smaller);
        }
        if let Some(size) = self.larger {
            finder = finder.size_filter(size, SizeMode::Larger);
        }
        if let Some(pattern) = &self.regex {
            finder = finder.matches_regex(pattern)?;
        }
        if !self.suffixes.is_empty() {
            finder = finder.has_suffixes(self.suffixes.iter().cloned());
        }
        if let Some(code) = &self.file_type {
            finder = finder.with_filter(TypeFilter::new(code)?);
        }
        if let Some(dir) = &self.dirname {
            finder = finder.has_dirname(dir);
        }
        if let Some(prefix) = &self.under {
            finder = finder.under_path(prefix);
        }
        if let Some(name) = &self.name_prefix {
            finder = finder.has_filename_prefix(name);
        }
        if let Some(mime) = &self.mime {
            finder = finder.has_mimetype(mime);
        }

        Ok(finder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_validation() {
        let cli = Cli::parse_from(["fluent-find", "--max-depth", "1", "-r", r"\.rs$", "-t", "f", "."]);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_cli_invalid_depth() {
        let cli = Cli::parse_from(["fluent-find", "--max-depth", "0"]);
        assert!(matches!(cli.validate(), Err(FindError::Other { .. })));
    }

    #[test]
    fn test_cli_invalid_pattern() {
        let cli = Cli::parse_from(["fluent-find", "--regex", "("]);
        assert!(matches!(cli.validate(), Err(FindError::PatternError { .. })));
    }

    #[test]
    fn test_cli_invalid_type() {
        let cli = Cli::parse_from(["fluent-find", "--type", "x"]);
        assert!(matches!(cli.validate(), Err(FindError::InvalidFileType(_))));
    }

    #[test]
    fn test_cli_builds_filter_chain() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::parse_from([
            "fluent-find", "--smaller", "20", "-s", ".txt", "-t", "f", "--under", "/logs", "-n", "app",
        ]);
        assert_eq!(cli.paths, vec!["."]);

        let finder = cli.build_finder("/definitely/not/a/real/root")?;
        assert_eq!(finder.filter_descriptions().len(), 5);
        assert!(finder.results().is_empty());

        Ok(())
    }
}
