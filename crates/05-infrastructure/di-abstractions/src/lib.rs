//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义组件扫描和应用上下文的核心接口。
//!
//! ## 核心接口
//!
//! - [`ComponentScanner`] - 组件扫描器接口
//! - [`ScanTarget`] - 经过校验的包命名空间
//! - [`ApplicationContext`] - 应用上下文（容器）接口

pub mod container;
pub mod scanner;

pub use container::*;
pub use scanner::*;
