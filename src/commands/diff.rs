//! # SK 文件比较命令实现
//!
//! 读取两个 SK 文件，比较后打印报告。
//!
//! ## 功能
//! - 按需读取同核文件的原子数据
//! - 打印原子数据和积分表的最大偏差
//! - 网格不兼容或积分表太短时打印警告并跳过积分表部分
//!
//! ## 依赖关系
//! - 使用 `parsers/skf.rs`
//! - 使用 `compare/`
//! - 使用 `utils/output.rs`

use crate::compare::{compare_skfiles, CompareOptions, IntegralOutcome};
use crate::error::Result;
use crate::parsers::skf;
use crate::utils::output;

use std::path::Path;

/// 执行比较
pub fn execute(path1: &Path, path2: &Path, options: &CompareOptions) -> Result<()> {
    // 任一文件解析失败都不输出部分报告
    let sk1 = skf::parse_skf_file(path1, options.compare_atomic)?;
    let sk2 = skf::parse_skf_file(path2, options.compare_atomic)?;

    let comparison = compare_skfiles(&sk1, &sk2, options)?;

    if let Some(atomic) = &comparison.atomic {
        output::print_section("Atomic data");
        output::print_lines(&atomic.lines());
        println!();
    }

    output::print_section("Integral tables");
    match &comparison.integrals {
        IntegralOutcome::Compared(report) => output::print_lines(&report.lines()),
        IntegralOutcome::Skipped(reason) => output::print_warning(&reason.to_string()),
    }

    Ok(())
}
