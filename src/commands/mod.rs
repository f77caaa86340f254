//! # 命令执行模块
//!
//! 实现比较命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `compare/`, `utils/`
//! - 子模块: diff

pub mod diff;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let options = cli.options();
    diff::execute(&cli.skfiles[0], &cli.skfiles[1], &options)
}
