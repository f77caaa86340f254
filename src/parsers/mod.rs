//! # 解析器模块
//!
//! 提供 Slater-Koster 文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: skf

pub mod skf;
