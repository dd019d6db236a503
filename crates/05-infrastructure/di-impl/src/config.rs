//! 上下文配置

use di_abstractions::ScanTarget;
use infrastructure_common::{
    normalize_package, ComponentResult, ConfigError, ConfigResult, Configuration,
};
use serde::Deserialize;

/// 应用上下文配置
///
/// 可以由配置类生成，也可以从 TOML 文本解析：
///
/// ```toml
/// base_packages = ["bean_lister::beans", "bean_lister.beans1"]
/// allow_bean_definition_overriding = false
/// lazy_init = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// 要扫描的包命名空间
    pub base_packages: Vec<String>,
    /// 是否允许同名 bean 定义覆盖
    pub allow_bean_definition_overriding: bool,
    /// 是否延迟实例化所有单例
    pub lazy_init: bool,
}

impl ContextConfig {
    /// 使用配置类声明的扫描包创建配置
    pub fn for_configuration<C: Configuration>() -> Self {
        Self {
            base_packages: C::base_packages(),
            ..Self::default()
        }
    }

    /// 从 TOML 文本解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            source: Box::new(e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 校验所有包命名空间
    pub fn validate(&self) -> ConfigResult<()> {
        for package in &self.base_packages {
            normalize_package(package).map_err(|e| ConfigError::ValidationError {
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// 转换为扫描目标，保持声明顺序
    pub fn scan_targets(&self) -> ComponentResult<Vec<ScanTarget>> {
        self.base_packages
            .iter()
            .map(|package| ScanTarget::parse(package))
            .collect()
    }
}
