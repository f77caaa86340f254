//! # 比较模块
//!
//! 比较两个已解析的 SK 文件，给出各物理量的最大偏差及其位置。
//!
//! 所有输入都通过参数显式传入（[`CompareOptions`]），不依赖命令行层，
//! 因此可以单独测试。网格不兼容和积分表太短不会中断比较，
//! 而是记录在 [`IntegralOutcome::Skipped`] 中。
//!
//! ## 依赖关系
//! - 被 `commands/diff.rs` 使用
//! - 使用 `models/`
//! - 子模块: maxloc, atomic, integrals, report

pub mod atomic;
pub mod integrals;
pub mod maxloc;
pub mod report;

pub use atomic::{compare_atomic_data, AtomicReport};
pub use integrals::{compare_integral_tables, IntegralReport, TableDeviation};
pub use maxloc::Deviation;

use crate::error::{Result, SkdiffError};
use crate::models::SkFile;

/// 比较选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// 是否比较原子数据（仅同核文件）
    pub compare_atomic: bool,
    /// 积分表开头跳过的行数
    pub skip_rows: usize,
}

/// 积分表比较的结果
#[derive(Debug)]
pub enum IntegralOutcome {
    Compared(IntegralReport),
    /// 非致命条件导致跳过比较
    Skipped(SkdiffError),
}

/// 两个文件的完整比较结果
#[derive(Debug)]
pub struct Comparison {
    pub atomic: Option<AtomicReport>,
    pub integrals: IntegralOutcome,
}

/// 比较两个 SK 文件
///
/// 致命错误（形状不匹配、缺少原子数据）直接返回；
/// 积分表的非致命条件放入结果中，原子数据比较不受影响。
pub fn compare_skfiles(a: &SkFile, b: &SkFile, options: &CompareOptions) -> Result<Comparison> {
    if a.format != b.format {
        return Err(SkdiffError::DataShapeMismatch {
            quantity: format!("shells ({} vs {} format)", a.format, b.format),
            left: a.format.shell_count(),
            right: b.format.shell_count(),
        });
    }

    let atomic = if options.compare_atomic {
        let atomic_a = a.atomic.as_ref().ok_or_else(|| SkdiffError::MissingAtomicData {
            path: a.name.clone(),
        })?;
        let atomic_b = b.atomic.as_ref().ok_or_else(|| SkdiffError::MissingAtomicData {
            path: b.name.clone(),
        })?;
        Some(compare_atomic_data(atomic_a, atomic_b)?)
    } else {
        None
    };

    let integrals = match compare_integral_tables(&a.tables, &b.tables, options.skip_rows) {
        Ok(report) => IntegralOutcome::Compared(report),
        Err(e) if !e.is_fatal() => IntegralOutcome::Skipped(e),
        Err(e) => return Err(e),
    };

    Ok(Comparison { atomic, integrals })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AtomicData, IntegralTables, SkFormat};
    use ndarray::Array2;

    fn skfile(name: &str, grid_spacing: f64, rows: usize, onsite_s: f64) -> SkFile {
        let atomic = AtomicData::new(
            SkFormat::Simple,
            vec![0.0, -0.2, onsite_s],
            vec![0.0, 0.3, 0.4],
            vec![0.0, 2.0, 2.0],
        )
        .unwrap();
        let ham = Array2::from_elem((rows, 10), -0.1);
        let over = Array2::from_elem((rows, 10), 0.2);

        SkFile {
            name: name.to_string(),
            format: SkFormat::Simple,
            atomic: Some(atomic),
            tables: IntegralTables::new(SkFormat::Simple, grid_spacing, ham, over).unwrap(),
        }
    }

    #[test]
    fn test_atomic_only_when_requested() {
        let a = skfile("a", 0.02, 5, -0.5);
        let b = skfile("b", 0.02, 5, -0.4);

        let result = compare_skfiles(&a, &b, &CompareOptions::default()).unwrap();
        assert!(result.atomic.is_none());
        assert!(matches!(result.integrals, IntegralOutcome::Compared(_)));

        let options = CompareOptions {
            compare_atomic: true,
            skip_rows: 0,
        };
        let result = compare_skfiles(&a, &b, &options).unwrap();
        let atomic = result.atomic.unwrap();
        assert_eq!(atomic.onsite.index, 2);
    }

    #[test]
    fn test_grid_mismatch_keeps_atomic_report() {
        let a = skfile("a", 0.1, 5, -0.5);
        let b = skfile("b", 0.10000002, 5, -0.5);
        let options = CompareOptions {
            compare_atomic: true,
            skip_rows: 0,
        };

        let result = compare_skfiles(&a, &b, &options).unwrap();
        assert!(result.atomic.is_some());
        assert!(matches!(
            result.integrals,
            IntegralOutcome::Skipped(SkdiffError::IncompatibleGrid { .. })
        ));
    }

    #[test]
    fn test_too_short_is_not_fatal() {
        let a = skfile("a", 0.02, 3, -0.5);
        let b = skfile("b", 0.02, 8, -0.5);
        let options = CompareOptions {
            compare_atomic: false,
            skip_rows: 3,
        };

        let result = compare_skfiles(&a, &b, &options).unwrap();
        assert!(matches!(
            result.integrals,
            IntegralOutcome::Skipped(SkdiffError::TablesTooShort { skip: 3, rows: 3 })
        ));
    }

    #[test]
    fn test_format_mismatch_is_fatal() {
        let a = skfile("a", 0.02, 5, -0.5);
        let mut b = skfile("b", 0.02, 5, -0.5);
        b.format = SkFormat::Extended;

        let err = compare_skfiles(&a, &b, &CompareOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            SkdiffError::DataShapeMismatch { left: 3, right: 4, .. }
        ));
    }

    #[test]
    fn test_missing_atomic_data() {
        let a = skfile("a", 0.02, 5, -0.5);
        let mut b = skfile("b.skf", 0.02, 5, -0.5);
        b.atomic = None;
        let options = CompareOptions {
            compare_atomic: true,
            skip_rows: 0,
        };

        let err = compare_skfiles(&a, &b, &options).unwrap_err();
        match err {
            SkdiffError::MissingAtomicData { path } => assert_eq!(path, "b.skf"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
