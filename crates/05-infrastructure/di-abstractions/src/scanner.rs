//! 组件扫描器抽象接口
//!
//! 提供按包命名空间发现组件的能力

use infrastructure_common::{
    normalize_package, package_contains, ComponentDescriptor, ComponentError, ComponentResult,
};
use std::fmt;

/// 组件扫描器 trait
///
/// 用于在包命名空间中发现组件
pub trait ComponentScanner: Send + Sync {
    /// 扫描指定包命名空间中的组件
    fn scan(&self, target: &ScanTarget) -> Result<Vec<ComponentDescriptor>, ComponentError>;

    /// 获取扫描器名称
    fn name(&self) -> &str;

    /// 检查是否支持指定的扫描目标
    fn supports(&self, _target: &ScanTarget) -> bool {
        true
    }
}

/// 扫描目标
///
/// 一个经过规范化的包命名空间，例如 `bean_lister::beans`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScanTarget {
    package: String,
}

impl ScanTarget {
    /// 解析并校验包命名空间
    pub fn parse(raw: &str) -> ComponentResult<Self> {
        Ok(Self {
            package: normalize_package(raw)?,
        })
    }

    /// 获取扫描目标的字符串表示
    pub fn as_str(&self) -> &str {
        &self.package
    }

    /// 判断模块路径是否位于此命名空间内
    pub fn contains(&self, module_path: &str) -> bool {
        package_contains(&self.package, module_path)
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.package)
    }
}
