//! # Slater-Koster 文件解析器
//!
//! 解析传统 (`.skf`) 格式的 SK 文件，包括带 f 壳层的扩展格式。
//!
//! ## SK 文件格式说明
//! ```text
//! @                                # 可选，扩展格式标记
//! gridDist nGridPoints
//! Ed Ep Es SPE Ud Up Us fd fp fs   # 仅同核文件 (扩展格式前面多 Ef, Uf, ff)
//! mass c2 ... c9 rcut d1 ... d10   # 质量和排斥势多项式，不参与比较
//! Hdd0 ... Hss0 Sdd0 ... Sss0      # nGridPoints 行积分表
//! ...
//! Spline                           # 可选，排斥势样条，忽略
//! ```
//!
//! 数值之间可以用空格或逗号分隔，`N*value` 表示重复 N 次。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/skfile.rs`

use crate::error::{Result, SkdiffError};
use crate::models::{AtomicData, IntegralTables, SkFile, SkFormat};
use ndarray::Array2;
use std::fs;
use std::path::Path;

/// 网格点数上限，超过时视为文件损坏
const MAX_GRID_POINTS: f64 = u32::MAX as f64;

/// 解析 SK 文件
///
/// `homonuclear` 为真时读取原子数据行。
pub fn parse_skf_file(path: &Path, homonuclear: bool) -> Result<SkFile> {
    if !path.exists() {
        return Err(SkdiffError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| SkdiffError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_skf_content(&content, &path.display().to_string(), homonuclear)
}

/// 从字符串内容解析 SK 文件
pub fn parse_skf_content(content: &str, name: &str, homonuclear: bool) -> Result<SkFile> {
    let error = |line: usize, reason: String| SkdiffError::ParseError {
        path: name.to_string(),
        line,
        reason,
    };

    // (行号, 内容)，跳过空行
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (first_no, first) = lines
        .next()
        .ok_or_else(|| error(1, "File is empty".to_string()))?;

    let (format, (header_no, header)) = if first.starts_with('@') {
        let header = lines
            .next()
            .ok_or_else(|| error(first_no, "Missing grid line after '@'".to_string()))?;
        (SkFormat::Extended, header)
    } else {
        (SkFormat::Simple, (first_no, first))
    };

    // 网格行
    let values = parse_values(header, 2).map_err(|reason| error(header_no, reason))?;
    if values.len() < 2 {
        return Err(error(
            header_no,
            "Expected grid spacing and number of grid points".to_string(),
        ));
    }
    let grid_spacing = values[0];
    if !(grid_spacing > 0.0) {
        return Err(error(
            header_no,
            format!("Grid spacing must be positive, got {}", grid_spacing),
        ));
    }
    let grid_points = values[1];
    if grid_points < 0.0 || grid_points.fract() != 0.0 || grid_points > MAX_GRID_POINTS {
        return Err(error(
            header_no,
            format!("Invalid number of grid points: {}", grid_points),
        ));
    }
    let grid_points = grid_points as usize;

    // 原子数据行
    let mut last_no = header_no;
    let atomic = if homonuclear {
        let (line_no, line) = lines
            .next()
            .ok_or_else(|| error(last_no, "Missing atomic data line".to_string()))?;
        last_no = line_no;
        let values = parse_values(line, 3 * format.shell_count() + 1)
            .map_err(|reason| error(line_no, reason))?;
        Some(parse_atomic_line(format, &values).map_err(|reason| error(line_no, reason))?)
    } else {
        None
    };

    // 质量 / 排斥势多项式行
    let (mass_no, _) = lines.next().ok_or_else(|| {
        error(
            last_no,
            "Missing mass and repulsive polynomial line".to_string(),
        )
    })?;
    last_no = mass_no;

    // 积分表，逐行收集，读完后再组装成二维数组
    let channels = format.channel_count();
    let mut hamiltonian = Vec::new();
    let mut overlap = Vec::new();

    for row in 0..grid_points {
        let (line_no, line) = lines.next().ok_or_else(|| {
            error(
                last_no,
                format!("Expected {} table rows, found {}", grid_points, row),
            )
        })?;
        last_no = line_no;

        if line.starts_with("Spline") {
            return Err(error(
                line_no,
                format!("Table ended after {} of {} rows", row, grid_points),
            ));
        }

        let values = parse_values(line, 2 * channels).map_err(|reason| error(line_no, reason))?;
        if values.len() < 2 * channels {
            return Err(error(
                line_no,
                format!(
                    "Expected {} values in table row, found {}",
                    2 * channels,
                    values.len()
                ),
            ));
        }

        hamiltonian.extend_from_slice(&values[..channels]);
        overlap.extend_from_slice(&values[channels..2 * channels]);
    }

    let shape_error = |e: ndarray::ShapeError| error(last_no, e.to_string());
    let hamiltonian =
        Array2::from_shape_vec((grid_points, channels), hamiltonian).map_err(shape_error)?;
    let overlap = Array2::from_shape_vec((grid_points, channels), overlap).map_err(shape_error)?;

    let tables = IntegralTables::new(format, grid_spacing, hamiltonian, overlap)?;

    Ok(SkFile {
        name: name.to_string(),
        format,
        atomic,
        tables,
    })
}

/// 解析同核原子数据行: 在位能, SPE, Hubbard U, 占据数
fn parse_atomic_line(format: SkFormat, values: &[f64]) -> std::result::Result<AtomicData, String> {
    let n = format.shell_count();
    let expected = 3 * n + 1;
    if values.len() < expected {
        return Err(format!(
            "Expected {} values in atomic data line, found {}",
            expected,
            values.len()
        ));
    }

    let onsites = values[..n].to_vec();
    // values[n] 是自旋极化误差 (SPE)，不比较
    let hubbard_us = values[n + 1..2 * n + 1].to_vec();
    let occupations = values[2 * n + 1..3 * n + 1].to_vec();

    AtomicData::new(format, onsites, hubbard_us, occupations).map_err(|e| e.to_string())
}

/// 解析一行数值，支持逗号分隔和 `N*value` 重复
///
/// `max_values` 是该行最多用得到的数值个数，重复次数超出剩余容量时报错。
fn parse_values(line: &str, max_values: usize) -> std::result::Result<Vec<f64>, String> {
    let mut values = Vec::new();

    for token in line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        match token.split_once('*') {
            Some((count, value)) => {
                let count: usize = count
                    .parse()
                    .map_err(|_| format!("Invalid repeat count in '{}'", token))?;
                let value: f64 = value
                    .parse()
                    .map_err(|_| format!("Invalid number in '{}'", token))?;
                let room = max_values.saturating_sub(values.len());
                if count > room {
                    return Err(format!(
                        "Repeat count too large in '{}' (at most {} values expected)",
                        token, max_values
                    ));
                }
                values.extend(std::iter::repeat(value).take(count));
            }
            None => {
                let value: f64 = token
                    .parse()
                    .map_err(|_| format!("Invalid number '{}'", token))?;
                values.push(value);
            }
        }
    }

    Ok(values)
}
