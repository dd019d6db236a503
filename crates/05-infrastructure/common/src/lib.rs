//! # Infrastructure Common
//!
//! 组件扫描容器的公共 traits、组件目录和命名约定。
//!
//! ## 核心组件
//!
//! - [`Component`] - 组件基础 trait
//! - [`Configuration`] - 声明扫描包的配置类 trait
//! - [`ComponentDescriptor`] - 组件描述符（bean 定义）
//! - [`ComponentCatalog`] - 编译期注册的组件目录
//! - [`default_bean_name`] - bean 命名约定
//!
//! ## 设计原则
//!
//! - 组件在程序启动前通过生成代码注册，不依赖运行时反射
//! - 容器是显式构造的对象，没有隐式的全局上下文
//! - 约定优于配置

pub mod catalog;
pub mod component;
pub mod configuration;
pub mod conventions;
pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use catalog::*;
pub use component::*;
pub use configuration::*;
pub use conventions::*;
pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;

/// 供 `component-macros` 生成代码使用，不属于公开 API
#[doc(hidden)]
pub mod __private {
    pub use ctor;
}
