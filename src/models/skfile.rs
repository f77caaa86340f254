//! # Slater-Koster 文件数据模型
//!
//! 存储 SK 文件中的原子参数和双中心积分表。
//!
//! 所有数组的长度由文件格式 [`SkFormat`] 决定，并在构造时校验，
//! 因此比较模块可以在入口处发现形状不匹配，而不是在计算中途越界。
//!
//! ## 依赖关系
//! - 被 `parsers/skf.rs` 使用
//! - 被 `compare/` 使用
//! - 使用 `ndarray` 存储二维积分表

use crate::error::{Result, SkdiffError};
use ndarray::Array2;

/// SK 文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkFormat {
    /// 传统格式: s, p, d 壳层, 10 个积分通道
    Simple,
    /// 扩展格式 (首行为 `@`): s, p, d, f 壳层, 20 个积分通道
    Extended,
}

impl SkFormat {
    /// 壳层数
    pub fn shell_count(self) -> usize {
        match self {
            SkFormat::Simple => 3,
            SkFormat::Extended => 4,
        }
    }

    /// 每个积分表的通道数
    pub fn channel_count(self) -> usize {
        match self {
            SkFormat::Simple => 10,
            SkFormat::Extended => 20,
        }
    }
}

impl std::fmt::Display for SkFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkFormat::Simple => write!(f, "simple"),
            SkFormat::Extended => write!(f, "extended"),
        }
    }
}

/// 同核 SK 文件中的原子数据
///
/// 壳层顺序与文件一致：角动量从高到低，最后一个是 s 壳层。
#[derive(Debug, Clone, PartialEq)]
pub struct AtomicData {
    onsites: Vec<f64>,
    hubbard_us: Vec<f64>,
    occupations: Vec<f64>,
}

impl AtomicData {
    /// 创建原子数据，三个序列的长度必须等于格式的壳层数
    pub fn new(
        format: SkFormat,
        onsites: Vec<f64>,
        hubbard_us: Vec<f64>,
        occupations: Vec<f64>,
    ) -> Result<Self> {
        let expected = format.shell_count();
        for (quantity, values) in [
            ("onsites", &onsites),
            ("hubbard_us", &hubbard_us),
            ("occupations", &occupations),
        ] {
            if values.len() != expected {
                return Err(SkdiffError::DataShapeMismatch {
                    quantity: quantity.to_string(),
                    left: expected,
                    right: values.len(),
                });
            }
        }

        Ok(AtomicData {
            onsites,
            hubbard_us,
            occupations,
        })
    }

    /// 在位能
    pub fn onsites(&self) -> &[f64] {
        &self.onsites
    }

    /// Hubbard U
    pub fn hubbard_us(&self) -> &[f64] {
        &self.hubbard_us
    }

    /// 占据数
    pub fn occupations(&self) -> &[f64] {
        &self.occupations
    }

    /// 壳层数
    pub fn shell_count(&self) -> usize {
        self.onsites.len()
    }
}

/// 哈密顿量和重叠积分表
#[derive(Debug, Clone, PartialEq)]
pub struct IntegralTables {
    grid_spacing: f64,
    hamiltonian: Array2<f64>,
    overlap: Array2<f64>,
}

impl IntegralTables {
    /// 创建积分表，两个表形状必须一致，列数等于格式的通道数
    pub fn new(
        format: SkFormat,
        grid_spacing: f64,
        hamiltonian: Array2<f64>,
        overlap: Array2<f64>,
    ) -> Result<Self> {
        let channels = format.channel_count();
        if hamiltonian.ncols() != channels {
            return Err(SkdiffError::DataShapeMismatch {
                quantity: "hamiltonian channels".to_string(),
                left: channels,
                right: hamiltonian.ncols(),
            });
        }
        if overlap.ncols() != channels {
            return Err(SkdiffError::DataShapeMismatch {
                quantity: "overlap channels".to_string(),
                left: channels,
                right: overlap.ncols(),
            });
        }
        if hamiltonian.nrows() != overlap.nrows() {
            return Err(SkdiffError::DataShapeMismatch {
                quantity: "grid points".to_string(),
                left: hamiltonian.nrows(),
                right: overlap.nrows(),
            });
        }

        Ok(IntegralTables {
            grid_spacing,
            hamiltonian,
            overlap,
        })
    }

    /// 网格间距
    pub fn grid_spacing(&self) -> f64 {
        self.grid_spacing
    }

    /// 已填充的网格点数
    pub fn grid_point_count(&self) -> usize {
        self.hamiltonian.nrows()
    }

    /// 积分通道数
    pub fn channel_count(&self) -> usize {
        self.hamiltonian.ncols()
    }

    /// 哈密顿量表，形状 [网格点, 通道]
    pub fn hamiltonian(&self) -> &Array2<f64> {
        &self.hamiltonian
    }

    /// 重叠积分表，形状与哈密顿量表相同
    pub fn overlap(&self) -> &Array2<f64> {
        &self.overlap
    }
}

/// 解析后的 SK 文件
#[derive(Debug, Clone)]
pub struct SkFile {
    /// 文件名（用于输出）
    pub name: String,

    /// 文件格式
    pub format: SkFormat,

    /// 原子数据，仅在按同核文件读取时存在
    pub atomic: Option<AtomicData>,

    /// 积分表
    pub tables: IntegralTables,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_data_length_checked() {
        let ok = AtomicData::new(
            SkFormat::Simple,
            vec![0.0, -0.2, -0.5],
            vec![0.0, 0.4, 0.4],
            vec![0.0, 2.0, 2.0],
        );
        assert!(ok.is_ok());
        assert_eq!(ok.unwrap().shell_count(), 3);

        let err = AtomicData::new(
            SkFormat::Extended,
            vec![0.0, -0.2, -0.5],
            vec![0.0, 0.0, 0.4, 0.4],
            vec![0.0, 0.0, 2.0, 2.0],
        )
        .unwrap_err();
        match err {
            SkdiffError::DataShapeMismatch {
                quantity,
                left,
                right,
            } => {
                assert_eq!(quantity, "onsites");
                assert_eq!(left, 4);
                assert_eq!(right, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_integral_tables_shape_checked() {
        let ham = Array2::<f64>::zeros((5, 10));
        let over = Array2::<f64>::zeros((5, 10));
        let tables = IntegralTables::new(SkFormat::Simple, 0.02, ham, over).unwrap();
        assert_eq!(tables.grid_point_count(), 5);
        assert_eq!(tables.channel_count(), 10);

        let ham = Array2::<f64>::zeros((5, 10));
        let over = Array2::<f64>::zeros((5, 10));
        assert!(IntegralTables::new(SkFormat::Extended, 0.02, ham, over).is_err());

        let ham = Array2::<f64>::zeros((5, 10));
        let over = Array2::<f64>::zeros((4, 10));
        assert!(IntegralTables::new(SkFormat::Simple, 0.02, ham, over).is_err());
    }
}
