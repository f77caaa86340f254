//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! 报告行本身不着色，方便其他脚本解析；只有提示标签使用颜色。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印报告小节标题，例如 `*** Integral tables:`
pub fn print_section(title: &str) {
    println!("*** {}:", title);
}

/// 逐行打印报告
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
