//! bean 名称输出

use std::io::{self, Write};

/// 逐行写出 bean 名称，保持给定顺序
pub fn print_bean_names<W: Write>(names: &[String], out: &mut W) -> io::Result<()> {
    for name in names {
        writeln!(out, "{name}")?;
    }
    out.flush()
}
