//! # 统一错误处理模块
//!
//! 定义 skdiff 的所有错误类型，使用 `thiserror` 派生。
//!
//! 比较过程中有两类条件不是致命错误（网格间距不兼容、积分表太短），
//! 它们只会跳过积分表部分，见 [`SkdiffError::is_fatal`]。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// skdiff 统一错误类型
#[derive(Error, Debug)]
pub enum SkdiffError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse SK-file: {path} (line {line})\nReason: {reason}")]
    ParseError {
        path: String,
        line: usize,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 数据形状错误
    // ─────────────────────────────────────────────────────────────
    #[error("Data shape mismatch for {quantity}: {left} vs {right}")]
    DataShapeMismatch {
        quantity: String,
        left: usize,
        right: usize,
    },

    #[error("No data to compare for {quantity}")]
    EmptyData { quantity: String },

    #[error("No atomic data loaded from {path}")]
    MissingAtomicData { path: String },

    // ─────────────────────────────────────────────────────────────
    // 比较条件（非致命）
    // ─────────────────────────────────────────────────────────────
    #[error("Incompatible grid separation ({left:.3} vs {right:.3}).")]
    IncompatibleGrid { left: f64, right: f64 },

    #[error("Tables too short (skipping {skip} of {rows} rows).")]
    TablesTooShort { skip: usize, rows: usize },
}

impl SkdiffError {
    /// 是否应终止整个运行
    ///
    /// 网格不兼容和积分表太短只跳过积分表比较，其他错误都是致命的。
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            SkdiffError::IncompatibleGrid { .. } | SkdiffError::TablesTooShort { .. }
        )
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SkdiffError>;
