//! 应用上下文抽象接口
//!
//! 提供容器的启动、关闭以及 bean 查询能力

use infrastructure_common::{ComponentDescriptor, DependencyResult, LifecycleState};
use std::any::Any;
use std::sync::Arc;

/// 应用上下文 trait
///
/// 容器由调用方显式构造，通过 [`refresh`](ApplicationContext::refresh) 启动，
/// 通过 [`close`](ApplicationContext::close) 关闭。
pub trait ApplicationContext: Send + Sync {
    /// 注册 bean 定义并实例化非延迟单例
    fn refresh(&mut self) -> DependencyResult<()>;

    /// 关闭容器，释放已缓存的单例
    fn close(&mut self) -> DependencyResult<()>;

    /// 当前生命周期状态
    fn state(&self) -> LifecycleState;

    /// 按注册顺序返回所有 bean 定义名称
    fn bean_definition_names(&self) -> Vec<String>;

    /// bean 定义数量
    fn bean_definition_count(&self) -> usize {
        self.bean_definition_names().len()
    }

    /// 是否存在指定名称的 bean 定义
    fn contains_bean(&self, name: &str) -> bool;

    /// 获取指定名称的 bean 定义
    fn bean_definition(&self, name: &str) -> Option<ComponentDescriptor>;

    /// 按名称获取 bean 实例
    fn get_bean(&self, name: &str) -> DependencyResult<Arc<dyn Any + Send + Sync>>;

    /// 按类型获取 bean 实例，要求该类型恰好有一个定义
    fn get_bean_of_type<T>(&self) -> DependencyResult<Arc<T>>
    where
        T: Any + Send + Sync,
        Self: Sized;
}
