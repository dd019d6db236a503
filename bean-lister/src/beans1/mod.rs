//! 第二个扫描包：订单和报表组件

use component_macros::component;

/// 订单控制器
#[component]
#[derive(Debug, Default)]
pub struct OrderController;

/// 报表生成器，首次请求时才实例化
#[component(lazy, name = "reportGenerator")]
#[derive(Debug, Default)]
pub struct ReportGenerator;

/// 已停用的导出组件，不会出现在扫描结果中
#[component(disabled)]
#[derive(Debug, Default)]
pub struct LegacyExporter;
