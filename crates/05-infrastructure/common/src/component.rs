//! 组件基础接口定义
//!
//! 提供所有可扫描组件必须实现的基础 trait 以及组件描述符

use crate::lifecycle::Lifetime;
use std::any::{Any, TypeId};
use std::fmt::Debug;

/// 装箱的错误类型，组件构造函数使用
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 组件构造函数类型
///
/// 由 `#[component]` 生成或在显式注册时提供
pub type ComponentConstructor = fn() -> Result<Box<dyn Any + Send + Sync>, BoxError>;

/// 组件基础 trait
///
/// 所有被容器管理的组件都必须实现此 trait
pub trait Component: Send + Sync + Debug + 'static {
    /// 组件（bean）名称
    fn name(&self) -> &'static str;

    /// 组件是否启用
    fn is_enabled(&self) -> bool {
        true
    }
}

/// 组件描述符
///
/// 容器中的一条 bean 定义：名称、类型、所在包以及如何构造实例
#[derive(Debug, Clone)]
pub struct ComponentDescriptor {
    /// 组件名称
    pub name: String,
    /// 组件类型ID
    pub type_id: TypeId,
    /// 组件完整类型名称
    pub type_name: &'static str,
    /// 组件所在模块路径（包命名空间）
    pub module_path: &'static str,
    /// 组件生命周期
    pub lifetime: Lifetime,
    /// 是否延迟实例化
    pub lazy: bool,
    /// 是否启用
    pub enabled: bool,
    /// 构造函数
    pub constructor: ComponentConstructor,
}

impl ComponentDescriptor {
    /// 创建显式注册的组件描述符，使用 `Default` 构造实例
    pub fn of<T: Component + Default>(name: impl Into<String>, module_path: &'static str) -> Self {
        Self {
            name: name.into(),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            module_path,
            lifetime: Lifetime::Singleton,
            lazy: false,
            enabled: true,
            constructor: construct_default::<T>,
        }
    }

    /// 设置生命周期
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// 设置为延迟实例化
    pub fn lazy(mut self) -> Self {
        self.lazy = true;
        self
    }

    /// 设置启用状态
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// 替换构造函数
    pub fn with_constructor(mut self, constructor: ComponentConstructor) -> Self {
        self.constructor = constructor;
        self
    }

    /// 是否为单例
    pub fn is_singleton(&self) -> bool {
        self.lifetime == Lifetime::Singleton
    }

    /// 调用构造函数创建实例
    pub fn instantiate(&self) -> Result<Box<dyn Any + Send + Sync>, BoxError> {
        (self.constructor)()
    }
}

fn construct_default<T: Component + Default>() -> Result<Box<dyn Any + Send + Sync>, BoxError> {
    Ok(Box::new(T::default()))
}
