//! # 积分表比较
//!
//! 比较两个 SK 文件的哈密顿量表和重叠积分表。
//!
//! ## 比较步骤
//! 1. 网格间距之差超过 [`GRID_TOLERANCE`] 时放弃比较
//! 2. 取两个文件网格点数的较小值，跳过开头的 `skip_rows` 行
//! 3. 对剩余行的所有通道计算 `||a| - |b||` 并定位最大值
//!
//! 报告位置时哈密顿量使用 0 起始的 (行, 列)，重叠积分使用 1 起始，
//! 与已有工具的输出保持一致。
//!
//! ## 依赖关系
//! - 被 `compare/mod.rs` 使用
//! - 使用 `compare/maxloc.rs`, `models/skfile.rs`

use super::maxloc::max_sign_insensitive_deviation;
use crate::error::{Result, SkdiffError};
use crate::models::IntegralTables;
use ndarray::{s, ArrayView2};

/// 网格间距允许的绝对误差
pub const GRID_TOLERANCE: f64 = 1e-8;

/// 报告位置使用的下标起点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexBase {
    Zero,
    One,
}

impl IndexBase {
    fn offset(self) -> usize {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }
}

/// 积分表中的最大偏差
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableDeviation {
    /// 偏差值
    pub value: f64,
    /// 原始表中的行号（0 起始，已计入跳过的行）
    pub row: usize,
    /// 通道号（0 起始）
    pub column: usize,
    /// 报告时使用的下标起点
    pub base: IndexBase,
}

impl TableDeviation {
    /// 报告中显示的 (行, 列)
    pub fn location(&self) -> (usize, usize) {
        let offset = self.base.offset();
        (self.row + offset, self.column + offset)
    }
}

/// 积分表比较结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegralReport {
    pub hamiltonian: TableDeviation,
    pub overlap: TableDeviation,
}

/// 比较两个文件的积分表
pub fn compare_integral_tables(
    a: &IntegralTables,
    b: &IntegralTables,
    skip_rows: usize,
) -> Result<IntegralReport> {
    check_grid(a.grid_spacing(), b.grid_spacing())?;

    if a.channel_count() != b.channel_count() {
        return Err(SkdiffError::DataShapeMismatch {
            quantity: "integral channels".to_string(),
            left: a.channel_count(),
            right: b.channel_count(),
        });
    }

    let rows = comparable_rows(a.grid_point_count(), b.grid_point_count(), skip_rows)?;

    let hamiltonian = table_deviation(
        "hamiltonian",
        a.hamiltonian().view(),
        b.hamiltonian().view(),
        skip_rows,
        rows,
        IndexBase::Zero,
    )?;
    let overlap = table_deviation(
        "overlap",
        a.overlap().view(),
        b.overlap().view(),
        skip_rows,
        rows,
        IndexBase::One,
    )?;

    Ok(IntegralReport {
        hamiltonian,
        overlap,
    })
}

/// 检查网格间距是否一致，恰好等于容差时视为一致
pub fn check_grid(left: f64, right: f64) -> Result<()> {
    if (left - right).abs() > GRID_TOLERANCE {
        return Err(SkdiffError::IncompatibleGrid { left, right });
    }
    Ok(())
}

/// 两个表共同拥有的行数，跳过后没有剩余行时报错
pub fn comparable_rows(rows_a: usize, rows_b: usize, skip_rows: usize) -> Result<usize> {
    let rows = rows_a.min(rows_b);
    if skip_rows >= rows {
        return Err(SkdiffError::TablesTooShort {
            skip: skip_rows,
            rows,
        });
    }
    Ok(rows)
}

/// 在行区间 `[skip_rows, rows)` 内定位最大偏差
fn table_deviation(
    quantity: &str,
    a: ArrayView2<f64>,
    b: ArrayView2<f64>,
    skip_rows: usize,
    rows: usize,
    base: IndexBase,
) -> Result<TableDeviation> {
    let (value, (row, column)) = max_sign_insensitive_deviation(
        quantity,
        a.slice(s![skip_rows..rows, ..]),
        b.slice(s![skip_rows..rows, ..]),
    )?;

    Ok(TableDeviation {
        value,
        row: row + skip_rows,
        column,
        base,
    })
}
