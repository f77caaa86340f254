//! # 数据模型模块
//!
//! 定义 SK 文件的原子数据和积分表数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `compare/` 和 `commands/` 使用
//! - 子模块: skfile

pub mod skfile;

pub use skfile::{AtomicData, IntegralTables, SkFile, SkFormat};
