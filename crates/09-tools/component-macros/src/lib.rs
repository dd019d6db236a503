//! # Component Macros
//!
//! 这个 crate 提供了用于编译期组件注册和配置类声明的过程宏。
//!
//! ## 核心宏
//!
//! - [`component`] - 自动组件注册宏
//! - [`Component`] - 仅实现 `Component` trait 的派生宏
//! - [`Configuration`] - 声明扫描包的配置类派生宏
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::{component, Configuration};
//!
//! #[component]
//! #[derive(Debug, Default)]
//! pub struct UserService;
//!
//! #[derive(Debug, Default, Configuration)]
//! #[component_scan("self::beans", "self::beans1")]
//! pub struct AppConfig;
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod component;
mod configuration;
mod utils;

/// 自动组件注册宏
///
/// 为结构体实现 `Component` trait，并在程序启动前把组件描述符登记到
/// `ComponentCatalog::global()`，组件所在模块即其包命名空间。
///
/// # 参数
///
/// - `singleton` - 单例生命周期（默认）
/// - `transient` - 瞬时生命周期
/// - `lazy` - 单例延迟到首次请求时实例化
/// - `disabled` - 登记但不参与扫描
/// - `name = "custom_name"` - 自定义 bean 名称，默认为首字母小写的类型名
/// - `constructor = "path::to::fn"` - 自定义构造函数 `fn() -> Result<Self, E>`，
///   默认使用 `Default::default`
///
/// # 示例
///
/// ```rust,ignore
/// #[component(transient, name = "reports")]
/// #[derive(Debug, Default)]
/// pub struct ReportGenerator;
/// ```
#[proc_macro_attribute]
pub fn component(args: TokenStream, input: TokenStream) -> TokenStream {
    component::component_impl(args, input)
}

/// 组件派生宏
///
/// 只实现 `Component` trait，不登记到组件目录。
///
/// # 示例
///
/// ```rust,ignore
/// #[derive(Debug, Component)]
/// #[component(name = "clock")]
/// pub struct SystemClock;
/// ```
#[proc_macro_derive(Component, attributes(component))]
pub fn derive_component(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    component::derive_component_impl(input)
}

/// 配置类派生宏
///
/// 实现 `Component` 和 `Configuration`。`#[component_scan]` 可以重复出现，
/// 扫描包按声明顺序排列。以 `self::` 开头的包相对于配置类所在模块，
/// 以 `crate::` 开头的包相对于 crate 根。
///
/// # 示例
///
/// ```rust,ignore
/// #[derive(Debug, Default, Configuration)]
/// #[component_scan("self::beans")]
/// #[component_scan("self::beans1")]
/// #[configuration(name = "myConfig")]
/// pub struct AppConfig;
/// ```
#[proc_macro_derive(Configuration, attributes(component_scan, configuration))]
pub fn derive_configuration(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    configuration::derive_configuration_impl(input)
}
