//! 约定规范定义
//!
//! bean 命名和包命名空间的约定规则

use crate::errors::{ComponentError, ComponentResult};

/// 包路径分隔符
pub const PACKAGE_SEPARATOR: &str = "::";

/// 根据类型名称生成默认 bean 名称
///
/// 取最后一个路径段；前两个字符都是大写时保持原样（`URLHolder`），
/// 否则将首字母小写（`UserService` -> `userService`）。
pub fn default_bean_name(type_name: &str) -> String {
    let short = type_name.rsplit(PACKAGE_SEPARATOR).next().unwrap_or(type_name);

    let mut chars = short.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    if let Some(second) = chars.clone().next() {
        if first.is_uppercase() && second.is_uppercase() {
            return short.to_string();
        }
    }

    first.to_lowercase().chain(chars).collect()
}

/// 规范化包命名空间
///
/// 同时接受 `.` 和 `::` 作为分隔符，返回以 `::` 连接的形式
pub fn normalize_package(raw: &str) -> ComponentResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ComponentError::scan_error("包命名空间不能为空"));
    }

    let unified = trimmed.replace('.', PACKAGE_SEPARATOR);
    let mut segments = Vec::new();

    for segment in unified.split(PACKAGE_SEPARATOR) {
        if segment.is_empty() {
            return Err(ComponentError::scan_error(format!(
                "包命名空间包含空路径段: {raw}"
            )));
        }
        if !segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ComponentError::scan_error(format!(
                "包命名空间包含非法字符: {raw}"
            )));
        }
        segments.push(segment);
    }

    Ok(segments.join(PACKAGE_SEPARATOR))
}

/// 判断模块路径是否位于包命名空间内
///
/// 按路径段匹配，`app::beans` 不包含 `app::beans1`
pub fn package_contains(package: &str, module_path: &str) -> bool {
    match module_path.strip_prefix(package) {
        Some("") => true,
        Some(rest) => rest.starts_with(PACKAGE_SEPARATOR),
        None => false,
    }
}
