//! # 比较结果的文本输出
//!
//! 把比较结果渲染为固定宽度的文本行。字段顺序和标签
//! ("Onsite:", "Hubbards:", ...) 供其他脚本解析，不能随意修改。
//!
//! ## 输出格式
//! ```text
//! Onsite:         5.000e-01     1
//! Hubbard (s):    0.000e+00
//! Hamiltonian:    1.000e-03 (  12,  3)
//! Overlap:        2.000e-04 (  13,  4)
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/diff.rs` 使用
//! - 使用 `compare/` 中的结果类型

use super::{AtomicReport, Deviation, IntegralReport, TableDeviation};

/// 数值字段宽度
const VALUE_WIDTH: usize = 12;

/// 数值字段的小数位数
const VALUE_PRECISION: usize = 3;

/// 科学计数法格式化，指数至少两位并带符号 (例如 `5.000e-01`)
pub fn format_sci(value: f64, width: usize, precision: usize) -> String {
    let text = if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        let raw = format!("{:.*e}", precision, value);
        match raw.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().unwrap_or(0);
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            None => raw,
        }
    };
    format!("{:>width$}", text, width = width)
}

fn value_field(value: f64) -> String {
    format_sci(value, VALUE_WIDTH, VALUE_PRECISION)
}

fn deviation_line(label: &str, dev: &Deviation) -> String {
    format!("{:<13}{} {:5}", label, value_field(dev.value), dev.index)
}

fn table_line(label: &str, dev: &TableDeviation) -> String {
    let (row, column) = dev.location();
    format!("{:<13}{} ({:4},{:3})", label, value_field(dev.value), row, column)
}

impl AtomicReport {
    /// 原子数据报告的四行输出
    pub fn lines(&self) -> Vec<String> {
        vec![
            deviation_line("Onsite:", &self.onsite),
            deviation_line("Hubbards:", &self.hubbard),
            format!("{:<13}{}", "Hubbard (s):", value_field(self.hubbard_last)),
            deviation_line("Occupations:", &self.occupation),
        ]
    }
}

impl IntegralReport {
    /// 积分表报告的两行输出
    pub fn lines(&self) -> Vec<String> {
        vec![
            table_line("Hamiltonian:", &self.hamiltonian),
            table_line("Overlap:", &self.overlap),
        ]
    }
}
