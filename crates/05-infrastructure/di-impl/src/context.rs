//! 基于组件扫描的应用上下文

use crate::config::ContextConfig;
use crate::processor::{ComponentScanProcessor, INTERNAL_COMPONENT_SCAN_PROCESSOR};
use crate::scanner::CatalogComponentScanner;
use dashmap::DashMap;
use di_abstractions::{ApplicationContext, ComponentScanner, ScanTarget};
use infrastructure_common::{
    BoxError, ComponentDescriptor, ComponentError, Configuration, DependencyError,
    DependencyResult, InfrastructureResult, LifecycleState, Lifetime, TypeInfo,
};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info};

type Instance = Arc<dyn Any + Send + Sync>;

/// 应用上下文实现
///
/// 启动时依次注册内部 bean、配置类 bean 和扫描到的组件，
/// 然后按注册顺序实例化所有非延迟单例。
pub struct AnnotationApplicationContext {
    /// 配置类的 bean 定义
    configuration: Option<ComponentDescriptor>,
    config: ContextConfig,
    targets: Vec<ScanTarget>,
    processor: Arc<ComponentScanProcessor>,
    /// bean 名称，按注册顺序
    definition_names: Vec<String>,
    definitions: HashMap<String, ComponentDescriptor>,
    /// 单例缓存
    singletons: DashMap<String, Instance>,
    state: LifecycleState,
}

impl AnnotationApplicationContext {
    /// 创建上下文构建器
    pub fn builder() -> ContextBuilder {
        ContextBuilder::default()
    }

    /// 以配置类创建并启动上下文
    pub fn from_configuration<C: Configuration>() -> InfrastructureResult<Self> {
        let mut context = Self::builder().configuration::<C>().build()?;
        context.refresh()?;
        Ok(context)
    }

    /// 上下文配置
    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    fn ensure_running(&self) -> DependencyResult<()> {
        if self.state == LifecycleState::Running {
            Ok(())
        } else {
            Err(DependencyError::LifecycleError {
                message: format!("容器当前状态为 {}, 无法获取 bean", self.state),
            })
        }
    }

    fn load_and_instantiate(&mut self) -> DependencyResult<()> {
        self.register_internal_beans()?;

        if let Some(configuration) = self.configuration.clone() {
            self.register_definition(configuration)?;
        }

        for candidate in self.processor.process(&self.targets)? {
            self.register_definition(candidate)?;
        }

        self.instantiate_singletons()
    }

    fn register_internal_beans(&mut self) -> DependencyResult<()> {
        let descriptor = ComponentDescriptor {
            name: INTERNAL_COMPONENT_SCAN_PROCESSOR.to_string(),
            type_id: TypeId::of::<ComponentScanProcessor>(),
            type_name: std::any::type_name::<ComponentScanProcessor>(),
            module_path: module_path!(),
            lifetime: Lifetime::Singleton,
            lazy: false,
            enabled: true,
            constructor: registered_instance_only,
        };

        self.register_definition(descriptor)?;
        let instance: Instance = self.processor.clone();
        self.singletons
            .insert(INTERNAL_COMPONENT_SCAN_PROCESSOR.to_string(), instance);
        Ok(())
    }

    fn register_definition(&mut self, descriptor: ComponentDescriptor) -> DependencyResult<()> {
        if descriptor.name.is_empty() {
            return Err(ComponentError::RegistrationError {
                type_name: descriptor.type_name.to_string(),
                message: "bean 名称不能为空".to_string(),
            }
            .into());
        }

        let existing = self
            .definitions
            .get(&descriptor.name)
            .map(|d| (d.type_id, d.type_name));

        match existing {
            Some((type_id, _)) if type_id == descriptor.type_id => {
                debug!("bean 定义已存在，跳过: {}", descriptor.name);
            }
            Some((_, existing_type)) => {
                if !self.config.allow_bean_definition_overriding {
                    return Err(ComponentError::BeanDefinitionConflict {
                        name: descriptor.name,
                        existing: existing_type.to_string(),
                        candidate: descriptor.type_name.to_string(),
                    }
                    .into());
                }
                info!(
                    "覆盖 bean 定义 {}: {} -> {}",
                    descriptor.name, existing_type, descriptor.type_name
                );
                self.definitions.insert(descriptor.name.clone(), descriptor);
            }
            None => {
                debug!(
                    "注册 bean 定义: {} ({}, {})",
                    descriptor.name, descriptor.type_name, descriptor.lifetime
                );
                self.definition_names.push(descriptor.name.clone());
                self.definitions.insert(descriptor.name.clone(), descriptor);
            }
        }

        Ok(())
    }

    fn instantiate_singletons(&self) -> DependencyResult<()> {
        for name in &self.definition_names {
            let definition = &self.definitions[name];
            if !definition.is_singleton()
                || definition.lazy
                || self.config.lazy_init
                || self.singletons.contains_key(name)
            {
                continue;
            }

            let instance = create_instance(definition)?;
            self.singletons.insert(name.clone(), instance);
            debug!("实例化单例: {}", name);
        }
        Ok(())
    }
}

impl std::fmt::Debug for AnnotationApplicationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotationApplicationContext")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("definition_names", &self.definition_names)
            .field("singletons", &self.singletons.len())
            .finish()
    }
}

impl ApplicationContext for AnnotationApplicationContext {
    fn refresh(&mut self) -> DependencyResult<()> {
        if !self.state.can_start() {
            return Err(DependencyError::LifecycleError {
                message: format!("容器当前状态为 {}, 无法启动", self.state),
            });
        }

        info!("启动应用上下文，扫描 {} 个包", self.targets.len());
        self.state = LifecycleState::Initializing;
        self.definition_names.clear();
        self.definitions.clear();
        self.singletons.clear();

        match self.load_and_instantiate() {
            Ok(()) => {
                self.state = LifecycleState::Running;
                info!(
                    "应用上下文启动完成，共 {} 个 bean 定义",
                    self.definition_names.len()
                );
                Ok(())
            }
            Err(e) => {
                self.state = LifecycleState::Error;
                error!("应用上下文启动失败: {}", e);
                Err(e)
            }
        }
    }

    fn close(&mut self) -> DependencyResult<()> {
        match self.state {
            LifecycleState::Running => {
                self.state = LifecycleState::Stopping;
                for name in self.definition_names.iter().rev() {
                    if self.singletons.remove(name).is_some() {
                        debug!("释放单例: {}", name);
                    }
                }
                self.state = LifecycleState::Stopped;
                info!("应用上下文已关闭");
                Ok(())
            }
            LifecycleState::Initializing | LifecycleState::Stopping => {
                Err(DependencyError::LifecycleError {
                    message: format!("容器当前状态为 {}, 无法关闭", self.state),
                })
            }
            state => {
                debug!("容器未运行 ({})，忽略关闭请求", state);
                Ok(())
            }
        }
    }

    fn state(&self) -> LifecycleState {
        self.state
    }

    fn bean_definition_names(&self) -> Vec<String> {
        self.definition_names.clone()
    }

    fn bean_definition_count(&self) -> usize {
        self.definition_names.len()
    }

    fn contains_bean(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    fn bean_definition(&self, name: &str) -> Option<ComponentDescriptor> {
        self.definitions.get(name).cloned()
    }

    fn get_bean(&self, name: &str) -> DependencyResult<Instance> {
        self.ensure_running()?;

        let definition =
            self.definitions
                .get(name)
                .ok_or_else(|| DependencyError::ComponentNotRegistered {
                    type_name: name.to_string(),
                })?;

        if !definition.is_singleton() {
            return create_instance(definition);
        }

        if let Some(instance) = self.singletons.get(name) {
            return Ok(instance.value().clone());
        }

        // 延迟单例：首次请求时创建
        let instance = create_instance(definition)?;
        let cached = self
            .singletons
            .entry(name.to_string())
            .or_insert(instance)
            .value()
            .clone();
        Ok(cached)
    }

    fn get_bean_of_type<T>(&self) -> DependencyResult<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        let type_id = TypeId::of::<T>();
        let type_info = TypeInfo::of::<T>();
        let candidates: Vec<&String> = self
            .definition_names
            .iter()
            .filter(|name| self.definitions[*name].type_id == type_id)
            .collect();

        match candidates.as_slice() {
            [] => Err(DependencyError::ComponentNotRegistered {
                type_name: type_info.module_path,
            }),
            [name] => self
                .get_bean(name)?
                .downcast::<T>()
                .map_err(|_| DependencyError::DependencyResolutionFailed {
                    type_name: type_info.module_path,
                    message: "bean 实例类型与定义不一致".to_string(),
                }),
            many => Err(DependencyError::DependencyResolutionFailed {
                type_name: type_info.module_path,
                message: format!(
                    "期望唯一的 bean, 实际找到 {} 个: {}",
                    many.len(),
                    many.iter().map(|n| n.as_str()).collect::<Vec<_>>().join(", ")
                ),
            }),
        }
    }
}

fn create_instance(definition: &ComponentDescriptor) -> DependencyResult<Instance> {
    let boxed = definition
        .instantiate()
        .map_err(|source| DependencyError::ComponentCreationFailed {
            type_name: definition.type_name.to_string(),
            source,
        })?;
    Ok(Arc::from(boxed))
}

fn registered_instance_only() -> Result<Box<dyn Any + Send + Sync>, BoxError> {
    Err("内部 bean 只能以实例形式注册".into())
}

/// 应用上下文构建器
#[derive(Default)]
pub struct ContextBuilder {
    configuration: Option<ComponentDescriptor>,
    config: ContextConfig,
    scanner: Option<Arc<dyn ComponentScanner>>,
}

impl ContextBuilder {
    /// 使用配置类：注册配置 bean 并追加其扫描包
    pub fn configuration<C: Configuration>(mut self) -> Self {
        let type_name = std::any::type_name::<C>();
        let module_path = type_name
            .rsplit_once("::")
            .map_or(type_name, |(module, _)| module);

        let name = C::default().name();
        self.configuration = Some(ComponentDescriptor::of::<C>(name, module_path));
        self.config
            .base_packages
            .extend(ContextConfig::for_configuration::<C>().base_packages);
        self
    }

    /// 应用上下文配置：替换开关，追加扫描包
    pub fn config(mut self, config: ContextConfig) -> Self {
        self.config.allow_bean_definition_overriding = config.allow_bean_definition_overriding;
        self.config.lazy_init = config.lazy_init;
        self.config.base_packages.extend(config.base_packages);
        self
    }

    /// 追加一个扫描包
    pub fn scan_package(mut self, package: impl Into<String>) -> Self {
        self.config.base_packages.push(package.into());
        self
    }

    /// 替换组件扫描器，默认扫描进程级组件目录
    pub fn scanner(mut self, scanner: Arc<dyn ComponentScanner>) -> Self {
        self.scanner = Some(scanner);
        self
    }

    /// 构建未启动的上下文
    pub fn build(self) -> InfrastructureResult<AnnotationApplicationContext> {
        self.config.validate()?;
        let targets = self.config.scan_targets()?;
        let scanner = self
            .scanner
            .unwrap_or_else(|| Arc::new(CatalogComponentScanner::global()));

        debug!(
            "构建应用上下文: 扫描器 {}, 扫描包 {:?}",
            scanner.name(),
            self.config.base_packages
        );

        Ok(AnnotationApplicationContext {
            configuration: self.configuration,
            config: self.config,
            targets,
            processor: Arc::new(ComponentScanProcessor::new(scanner)),
            definition_names: Vec::new(),
            definitions: HashMap::new(),
            singletons: DashMap::new(),
            state: LifecycleState::Uninitialized,
        })
    }
}
