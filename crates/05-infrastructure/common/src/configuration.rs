//! 配置类接口定义

use crate::component::Component;

/// 配置类 trait
///
/// 声明容器启动时要扫描的包命名空间。配置类本身也会作为 bean 注册到容器中，
/// 因此要求可通过 `Default` 构造。通常由 `#[derive(Configuration)]` 实现。
pub trait Configuration: Component + Default {
    /// 要扫描的包命名空间，按声明顺序排列
    fn base_packages() -> Vec<String>;
}
