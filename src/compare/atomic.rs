//! # 原子数据比较
//!
//! 比较两个同核 SK 文件中的在位能、Hubbard U 和占据数。
//!
//! ## 依赖关系
//! - 被 `compare/mod.rs` 使用
//! - 使用 `compare/maxloc.rs`, `models/skfile.rs`

use super::maxloc::{max_abs_deviation, Deviation};
use crate::error::{Result, SkdiffError};
use crate::models::AtomicData;

/// 原子数据比较结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomicReport {
    /// 在位能最大偏差
    pub onsite: Deviation,
    /// Hubbard U 最大偏差
    pub hubbard: Deviation,
    /// 最后一个壳层 (s) 的 Hubbard U 偏差，无论最大值出现在哪里都报告
    pub hubbard_last: f64,
    /// 占据数最大偏差
    pub occupation: Deviation,
}

/// 比较两组原子数据
pub fn compare_atomic_data(a: &AtomicData, b: &AtomicData) -> Result<AtomicReport> {
    if a.shell_count() != b.shell_count() {
        return Err(SkdiffError::DataShapeMismatch {
            quantity: "atomic shells".to_string(),
            left: a.shell_count(),
            right: b.shell_count(),
        });
    }

    let onsite = max_abs_deviation("onsites", a.onsites(), b.onsites())?;
    let hubbard = max_abs_deviation("hubbard_us", a.hubbard_us(), b.hubbard_us())?;
    let occupation = max_abs_deviation("occupations", a.occupations(), b.occupations())?;

    let hubbard_last = match (a.hubbard_us().last(), b.hubbard_us().last()) {
        (Some(x), Some(y)) => (x - y).abs(),
        _ => {
            return Err(SkdiffError::EmptyData {
                quantity: "hubbard_us".to_string(),
            })
        }
    };

    Ok(AtomicReport {
        onsite,
        hubbard,
        hubbard_last,
        occupation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkFormat;
    use approx::assert_abs_diff_eq;

    fn simple(onsites: [f64; 3], hubbard_us: [f64; 3], occupations: [f64; 3]) -> AtomicData {
        AtomicData::new(
            SkFormat::Simple,
            onsites.to_vec(),
            hubbard_us.to_vec(),
            occupations.to_vec(),
        )
        .unwrap()
    }

    #[test]
    fn test_identical_data() {
        let a = simple([0.0, -0.26, -0.50], [0.0, 0.36, 0.36], [0.0, 2.0, 2.0]);
        let report = compare_atomic_data(&a, &a.clone()).unwrap();

        for dev in [report.onsite, report.hubbard, report.occupation] {
            assert_eq!(dev, Deviation { value: 0.0, index: 0 });
        }
        assert_eq!(report.hubbard_last, 0.0);
    }

    #[test]
    fn test_onsite_deviation() {
        let a = simple([1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
        let b = simple([1.0, 2.5, 2.9], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
        let report = compare_atomic_data(&a, &b).unwrap();

        assert_eq!(report.onsite.index, 1);
        assert_abs_diff_eq!(report.onsite.value, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_last_shell_hubbard_reported_separately() {
        // 最大值在 d 壳层，s 壳层的偏差仍单独报告
        let a = simple([0.0; 3], [0.5, 0.30, 0.40], [0.0; 3]);
        let b = simple([0.0; 3], [0.1, 0.31, 0.41], [0.0; 3]);
        let report = compare_atomic_data(&a, &b).unwrap();

        assert_eq!(report.hubbard.index, 0);
        assert_abs_diff_eq!(report.hubbard.value, 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(report.hubbard_last, 0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_occupation_deviation() {
        let a = simple([0.0; 3], [0.0; 3], [0.0, 2.0, 2.0]);
        let b = simple([0.0; 3], [0.0; 3], [0.0, 3.0, 1.0]);
        let report = compare_atomic_data(&a, &b).unwrap();

        assert_eq!(report.occupation.index, 1);
        assert_abs_diff_eq!(report.occupation.value, 1.0);
    }

    #[test]
    fn test_format_mismatch() {
        let a = simple([0.0; 3], [0.0; 3], [0.0; 3]);
        let b = AtomicData::new(
            SkFormat::Extended,
            vec![0.0; 4],
            vec![0.0; 4],
            vec![0.0; 4],
        )
        .unwrap();

        let err = compare_atomic_data(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            SkdiffError::DataShapeMismatch { left: 3, right: 4, .. }
        ));
    }
}
