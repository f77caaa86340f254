//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数
//! - 两个 SK 文件路径
//! - `-a/--atomic`: 比较同核文件中的原子数据
//! - `-s/--skip N`: 积分表开头跳过的行数
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 转换为 `compare::CompareOptions` 后传给 `commands/`

use crate::compare::CompareOptions;
use clap::Parser;
use std::path::PathBuf;

/// skdiff - 比较两个 Slater-Koster 文件
#[derive(Parser, Debug)]
#[command(name = "skdiff")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Reads two SK-files and compares the numerical values stored in them",
    long_about = None
)]
pub struct Cli {
    /// SK-files to compare
    #[arg(num_args = 2, required = true, value_names = ["SKFILE1", "SKFILE2"])]
    pub skfiles: Vec<PathBuf>,

    /// Compare atomic values as stored in homonuclear SK-files
    #[arg(short, long, default_value_t = false)]
    pub atomic: bool,

    /// Skip a given number of lines at the start of the integral tables
    #[arg(short, long, value_name = "N", default_value_t = 0)]
    pub skip: usize,
}

impl Cli {
    /// 比较选项
    pub fn options(&self) -> CompareOptions {
        CompareOptions {
            compare_atomic: self.atomic,
            skip_rows: self.skip,
        }
    }
}
