//! 基于组件目录的扫描器

use di_abstractions::{ComponentScanner, ScanTarget};
use infrastructure_common::{ComponentCatalog, ComponentDescriptor, ComponentError};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone)]
enum CandidateSource {
    /// 进程级目录，由 `#[component]` 填充
    Global,
    /// 显式注册列表
    Explicit(Vec<ComponentDescriptor>),
}

/// 组件目录扫描器
///
/// 从组件目录中挑选位于目标包命名空间内、且已启用的组件。
/// 结果按 `(module_path, type_name)` 排序，保证多次扫描输出一致。
#[derive(Debug, Clone)]
pub struct CatalogComponentScanner {
    source: CandidateSource,
}

impl CatalogComponentScanner {
    /// 扫描进程级组件目录
    pub fn global() -> Self {
        Self {
            source: CandidateSource::Global,
        }
    }

    /// 扫描显式提供的组件列表
    pub fn from_descriptors(descriptors: Vec<ComponentDescriptor>) -> Self {
        Self {
            source: CandidateSource::Explicit(descriptors),
        }
    }

    fn candidates(&self) -> Vec<ComponentDescriptor> {
        match &self.source {
            CandidateSource::Global => ComponentCatalog::global().descriptors(),
            CandidateSource::Explicit(descriptors) => descriptors.clone(),
        }
    }
}

impl Default for CatalogComponentScanner {
    fn default() -> Self {
        Self::global()
    }
}

impl ComponentScanner for CatalogComponentScanner {
    fn scan(&self, target: &ScanTarget) -> Result<Vec<ComponentDescriptor>, ComponentError> {
        let mut seen = HashSet::new();
        let mut found: Vec<ComponentDescriptor> = self
            .candidates()
            .into_iter()
            .filter(|descriptor| descriptor.enabled && target.contains(descriptor.module_path))
            .filter(|descriptor| seen.insert(descriptor.type_id))
            .collect();

        found.sort_by(|a, b| {
            (a.module_path, a.type_name, &a.name).cmp(&(b.module_path, b.type_name, &b.name))
        });

        if found.is_empty() {
            debug!("包 {} 中没有发现组件", target);
        } else {
            debug!("扫描包 {} 完成，发现 {} 个组件", target, found.len());
        }

        Ok(found)
    }

    fn name(&self) -> &str {
        "catalog-scanner"
    }
}
