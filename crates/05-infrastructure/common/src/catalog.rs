//! 编译期组件目录
//!
//! `#[component]` 生成的代码在 `main` 之前把组件描述符写入全局目录，
//! 扫描器再按包命名空间从目录中挑选候选组件。

use crate::component::ComponentDescriptor;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

static GLOBAL_CATALOG: Lazy<ComponentCatalog> = Lazy::new(ComponentCatalog::new);

/// 组件目录
///
/// 只追加的描述符列表，注册顺序不做保证
#[derive(Debug, Default)]
pub struct ComponentCatalog {
    descriptors: RwLock<Vec<ComponentDescriptor>>,
}

impl ComponentCatalog {
    /// 创建空目录
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取进程级目录
    pub fn global() -> &'static ComponentCatalog {
        &GLOBAL_CATALOG
    }

    /// 注册组件描述符
    pub fn register(&self, descriptor: ComponentDescriptor) {
        tracing::trace!(
            "目录登记组件: {} ({})",
            descriptor.name,
            descriptor.type_name
        );
        self.descriptors.write().push(descriptor);
    }

    /// 获取所有描述符的快照
    pub fn descriptors(&self) -> Vec<ComponentDescriptor> {
        self.descriptors.read().clone()
    }

    /// 已登记的组件数量
    pub fn len(&self) -> usize {
        self.descriptors.read().len()
    }

    /// 目录是否为空
    pub fn is_empty(&self) -> bool {
        self.descriptors.read().is_empty()
    }
}
