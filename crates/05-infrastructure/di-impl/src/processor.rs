//! 内部组件扫描处理器
//!
//! 容器自身注册的内部 bean，负责按声明顺序扫描所有包命名空间

use di_abstractions::{ComponentScanner, ScanTarget};
use infrastructure_common::{Component, ComponentDescriptor, ComponentError, ComponentResult};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// 内部组件扫描处理器的 bean 名称
pub const INTERNAL_COMPONENT_SCAN_PROCESSOR: &str = "di_impl::internalComponentScanProcessor";

/// 组件扫描处理器
pub struct ComponentScanProcessor {
    scanner: Arc<dyn ComponentScanner>,
}

impl ComponentScanProcessor {
    /// 使用指定扫描器创建处理器
    pub fn new(scanner: Arc<dyn ComponentScanner>) -> Self {
        Self { scanner }
    }

    /// 依次扫描所有目标，返回按目标顺序拼接的候选组件
    pub fn process(&self, targets: &[ScanTarget]) -> ComponentResult<Vec<ComponentDescriptor>> {
        let mut candidates = Vec::new();

        for target in targets {
            if !self.scanner.supports(target) {
                return Err(ComponentError::scan_error(format!(
                    "扫描器 {} 不支持包 {}",
                    self.scanner.name(),
                    target
                )));
            }

            let found = self.scanner.scan(target)?;
            debug!("处理扫描目标 {}: {} 个候选组件", target, found.len());
            candidates.extend(found);
        }

        Ok(candidates)
    }
}

impl fmt::Debug for ComponentScanProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentScanProcessor")
            .field("scanner", &self.scanner.name())
            .finish()
    }
}

impl Component for ComponentScanProcessor {
    fn name(&self) -> &'static str {
        INTERNAL_COMPONENT_SCAN_PROCESSOR
    }
}
