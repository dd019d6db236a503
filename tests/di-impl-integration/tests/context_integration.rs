//! 应用上下文集成测试：组件通过 `#[component]` 在启动前登记到全局目录

use component_macros::{component, Configuration};
use di_abstractions::ApplicationContext;
use di_impl::{
    AnnotationApplicationContext, CatalogComponentScanner, ContextConfig,
    INTERNAL_COMPONENT_SCAN_PROCESSOR,
};
use infrastructure_common::{
    ComponentCatalog, ComponentError, Configuration as _, DependencyError, InfrastructureError,
    LifecycleState, Lifetime,
};
use std::sync::Arc;

mod inventory {
    use super::component;

    #[component]
    #[derive(Debug, Default)]
    pub struct Warehouse;

    #[component]
    #[derive(Debug, Default)]
    pub struct StockLevel;

    pub mod audit {
        use super::component;

        #[component(transient)]
        #[derive(Debug, Default)]
        pub struct AuditEntry;
    }
}

mod shipping {
    use super::component;

    #[component(name = "courier")]
    #[derive(Debug, Default)]
    pub struct ParcelCourier;
}

mod broken {
    use super::component;

    #[derive(Debug)]
    pub struct MissingCredentials;

    impl std::fmt::Display for MissingCredentials {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("missing credentials")
        }
    }

    impl std::error::Error for MissingCredentials {}

    #[component(constructor = "PaymentGateway::open")]
    #[derive(Debug)]
    pub struct PaymentGateway;

    impl PaymentGateway {
        fn open() -> Result<Self, MissingCredentials> {
            Err(MissingCredentials)
        }
    }
}

mod clash {
    use super::component;

    #[component(name = "duplicate")]
    #[derive(Debug, Default)]
    pub struct First;

    #[component(name = "duplicate")]
    #[derive(Debug, Default)]
    pub struct Second;
}

#[derive(Debug, Default, Configuration)]
#[component_scan("crate::inventory")]
#[component_scan("crate::shipping")]
struct InventoryConfig;

#[derive(Debug, Default, Configuration)]
struct EmptyConfig;

#[derive(Debug, Default, Configuration)]
#[component_scan("crate::shipping")]
struct ShippingConfig;

#[derive(Debug, Default, Configuration)]
#[component_scan("crate::broken")]
struct BrokenConfig;

#[derive(Debug, Default, Configuration)]
#[component_scan("crate::clash")]
struct ClashConfig;

#[test]
fn test_catalog_is_populated_before_main() {
    let names: Vec<String> = ComponentCatalog::global()
        .descriptors()
        .into_iter()
        .map(|d| d.name)
        .collect();

    assert!(names.contains(&"warehouse".to_string()));
    assert!(names.contains(&"courier".to_string()));
    assert_eq!(ComponentCatalog::global().len(), 7);
}

#[test]
fn test_scans_packages_in_declaration_order() -> anyhow::Result<()> {
    let context = AnnotationApplicationContext::from_configuration::<InventoryConfig>()?;

    assert_eq!(
        context.bean_definition_names(),
        vec![
            INTERNAL_COMPONENT_SCAN_PROCESSOR,
            "inventoryConfig",
            "stockLevel",
            "warehouse",
            "auditEntry",
            "courier",
        ]
    );
    assert_eq!(
        InventoryConfig::base_packages(),
        vec![
            "context_integration::inventory",
            "context_integration::shipping",
        ]
    );
    Ok(())
}

#[test]
fn test_zero_packages_lists_only_container_beans() -> anyhow::Result<()> {
    let context = AnnotationApplicationContext::from_configuration::<EmptyConfig>()?;

    assert_eq!(
        context.bean_definition_names(),
        vec![INTERNAL_COMPONENT_SCAN_PROCESSOR, "emptyConfig"]
    );
    Ok(())
}

#[test]
fn test_single_component_package_adds_one_name() -> anyhow::Result<()> {
    let empty = AnnotationApplicationContext::from_configuration::<EmptyConfig>()?;
    let single = AnnotationApplicationContext::from_configuration::<ShippingConfig>()?;

    assert_eq!(
        single.bean_definition_count(),
        empty.bean_definition_count() + 1
    );
    assert!(single.contains_bean("courier"));
    Ok(())
}

#[test]
fn test_repeated_bootstrap_gives_equal_output() -> anyhow::Result<()> {
    let first = AnnotationApplicationContext::from_configuration::<InventoryConfig>()?;
    let second = AnnotationApplicationContext::from_configuration::<InventoryConfig>()?;

    assert_eq!(
        first.bean_definition_names(),
        second.bean_definition_names()
    );
    Ok(())
}

#[test]
fn test_bean_instances() -> anyhow::Result<()> {
    let mut context = AnnotationApplicationContext::from_configuration::<InventoryConfig>()?;

    let warehouse = context.get_bean_of_type::<inventory::Warehouse>()?;
    let again = context.get_bean_of_type::<inventory::Warehouse>()?;
    assert!(Arc::ptr_eq(&warehouse, &again));

    let entry = context.get_bean("auditEntry")?;
    let other = context.get_bean("auditEntry")?;
    assert!(!Arc::ptr_eq(&entry, &other));

    let definition = context.bean_definition("auditEntry").unwrap();
    assert_eq!(definition.lifetime, Lifetime::Transient);
    assert_eq!(definition.module_path, "context_integration::inventory::audit");

    context.close()?;
    assert_eq!(context.state(), LifecycleState::Stopped);
    Ok(())
}

#[test]
fn test_constructor_failure_is_fatal() {
    let err = AnnotationApplicationContext::from_configuration::<BrokenConfig>().unwrap_err();

    match err {
        InfrastructureError::DependencyError {
            source: DependencyError::ComponentCreationFailed { type_name, source },
        } => {
            assert!(type_name.ends_with("PaymentGateway"));
            assert_eq!(source.to_string(), "missing credentials");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_conflicting_bean_names_are_fatal() {
    let err = AnnotationApplicationContext::from_configuration::<ClashConfig>().unwrap_err();

    assert!(matches!(
        err,
        InfrastructureError::DependencyError {
            source: DependencyError::Component(ComponentError::BeanDefinitionConflict { .. })
        }
    ));
}

#[test]
fn test_overriding_allowed_by_config() -> anyhow::Result<()> {
    let config = ContextConfig::from_toml_str(
        r#"
        base_packages = ["context_integration.clash"]
        allow_bean_definition_overriding = true
        "#,
    )?;

    let mut context = AnnotationApplicationContext::builder()
        .config(config)
        .build()?;
    context.refresh()?;

    assert_eq!(
        context.bean_definition_names(),
        vec![INTERNAL_COMPONENT_SCAN_PROCESSOR, "duplicate"]
    );
    // 按类型名排序后 Second 在后，覆盖 First
    assert!(context.get_bean_of_type::<clash::Second>().is_ok());
    Ok(())
}

#[test]
fn test_lazy_init_defers_all_singletons() -> anyhow::Result<()> {
    let config = ContextConfig::from_toml_str(
        r#"
        base_packages = ["context_integration::broken"]
        lazy_init = true
        "#,
    )?;

    let mut context = AnnotationApplicationContext::builder()
        .config(config)
        .scanner(Arc::new(CatalogComponentScanner::global()))
        .build()?;
    context.refresh()?;
    assert!(context.contains_bean("paymentGateway"));

    let err = context.get_bean("paymentGateway").unwrap_err();
    assert!(matches!(err, DependencyError::ComponentCreationFailed { .. }));
    Ok(())
}
