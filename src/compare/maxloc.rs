//! # 最大偏差定位
//!
//! 计算逐元素绝对差并返回最大值及其位置。
//!
//! 规则：
//! - 并列时取第一个出现的位置（一维取最小下标，二维按行优先顺序）
//! - NaN 视为最大值，第一个 NaN 胜出，避免损坏的数据被悄悄忽略
//!
//! ## 依赖关系
//! - 被 `compare/atomic.rs`, `compare/integrals.rs` 使用
//! - 使用 `ndarray`

use crate::error::{Result, SkdiffError};
use ndarray::ArrayView2;

/// 一维序列中的最大偏差
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deviation {
    /// 偏差值
    pub value: f64,
    /// 出现位置（0 起始）
    pub index: usize,
}

/// 在 (位置, 值) 序列中查找最大值
fn argmax<K>(values: impl IntoIterator<Item = (K, f64)>) -> Option<(K, f64)> {
    let mut best: Option<(K, f64)> = None;
    for (key, value) in values {
        let replace = match &best {
            None => true,
            Some((_, current)) => !current.is_nan() && (value.is_nan() || value > *current),
        };
        if replace {
            best = Some((key, value));
        }
    }
    best
}

/// 两个序列逐元素 `|a - b|` 的最大值及其下标
pub fn max_abs_deviation(quantity: &str, a: &[f64], b: &[f64]) -> Result<Deviation> {
    if a.len() != b.len() {
        return Err(SkdiffError::DataShapeMismatch {
            quantity: quantity.to_string(),
            left: a.len(),
            right: b.len(),
        });
    }

    let diffs = a.iter().zip(b).map(|(x, y)| (x - y).abs()).enumerate();
    argmax(diffs)
        .map(|(index, value)| Deviation { value, index })
        .ok_or_else(|| SkdiffError::EmptyData {
            quantity: quantity.to_string(),
        })
}

/// 两个表逐元素 `||a| - |b||` 的最大值及其 (行, 列)
///
/// 积分表的符号取决于轨道对的顺序约定，因此比较绝对值。
pub fn max_sign_insensitive_deviation(
    quantity: &str,
    a: ArrayView2<f64>,
    b: ArrayView2<f64>,
) -> Result<(f64, (usize, usize))> {
    if a.dim() != b.dim() {
        let (rows_a, cols_a) = a.dim();
        let (rows_b, cols_b) = b.dim();
        return Err(SkdiffError::DataShapeMismatch {
            quantity: quantity.to_string(),
            left: rows_a * cols_a,
            right: rows_b * cols_b,
        });
    }

    let diffs = a
        .indexed_iter()
        .zip(b.iter())
        .map(|((pos, x), y)| (pos, (x.abs() - y.abs()).abs()));

    argmax(diffs)
        .map(|(pos, value)| (value, pos))
        .ok_or_else(|| SkdiffError::EmptyData {
            quantity: quantity.to_string(),
        })
}
