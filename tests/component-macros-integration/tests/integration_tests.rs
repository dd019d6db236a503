//! 组件宏集成测试

use component_macros::{component, Configuration};
use infrastructure_common::{
    Component, ComponentCatalog, ComponentDescriptor, Configuration as _, Lifetime,
};

#[component]
#[derive(Debug, Default)]
pub struct MailSender;

#[component(transient, name = "smsGateway")]
#[derive(Debug, Default)]
pub struct SmsSender;

#[component(lazy)]
#[derive(Debug, Default)]
pub struct URLResolver;

#[component(disabled)]
#[derive(Debug, Default)]
pub struct RetiredService;

#[component(constructor = "PooledConnection::open")]
#[derive(Debug)]
pub struct PooledConnection {
    size: usize,
}

impl PooledConnection {
    fn open() -> Result<Self, std::io::Error> {
        Ok(Self { size: 4 })
    }
}

mod clock {
    use component_macros::Component;

    #[derive(Debug, Component)]
    #[component(name = "systemClock")]
    pub struct Clock;

    #[derive(Debug, Component)]
    #[component(disabled)]
    pub struct FrozenClock;
}

mod nested {
    pub mod settings {
        use component_macros::Configuration;

        #[derive(Debug, Default, Configuration)]
        #[component_scan("self::beans", "crate::clock")]
        #[component_scan("other_app.repositories")]
        pub struct NestedConfig;
    }
}

#[derive(Debug, Default, Configuration)]
#[configuration(name = "rootConfiguration")]
pub struct RootConfig;

fn descriptor(name: &str) -> ComponentDescriptor {
    ComponentCatalog::global()
        .descriptors()
        .into_iter()
        .find(|d| d.name == name)
        .unwrap_or_else(|| panic!("component {name} not registered"))
}

#[test]
fn test_default_registration() {
    let mail = descriptor("mailSender");

    assert_eq!(mail.lifetime, Lifetime::Singleton);
    assert!(!mail.lazy);
    assert!(mail.enabled);
    assert_eq!(mail.module_path, "integration_tests");
    assert!(mail.instantiate().unwrap().is::<MailSender>());
    assert_eq!(MailSender.name(), "mailSender");
}

#[test]
fn test_custom_name_and_lifetime() {
    let sms = descriptor("smsGateway");

    assert_eq!(sms.lifetime, Lifetime::Transient);
    assert_eq!(SmsSender.name(), "smsGateway");
}

#[test]
fn test_acronym_name_is_kept() {
    let resolver = descriptor("URLResolver");

    assert!(resolver.lazy);
    assert!(resolver.is_singleton());
}

#[test]
fn test_disabled_component_is_still_catalogued() {
    let retired = descriptor("retiredService");

    assert!(!retired.enabled);
    assert!(!RetiredService.is_enabled());
}

#[test]
fn test_custom_constructor() {
    let instance = descriptor("pooledConnection").instantiate().unwrap();
    let connection = instance.downcast::<PooledConnection>().unwrap();

    assert_eq!(connection.size, 4);
}

#[test]
fn test_derive_component_does_not_register() {
    assert_eq!(clock::Clock.name(), "systemClock");
    assert!(!clock::FrozenClock.is_enabled());
    assert!(ComponentCatalog::global()
        .descriptors()
        .iter()
        .all(|d| d.name != "systemClock"));
    assert_eq!(ComponentCatalog::global().len(), 5);
}

#[test]
fn test_configuration_packages() {
    assert_eq!(
        nested::settings::NestedConfig::base_packages(),
        vec![
            "integration_tests::nested::settings::beans",
            "integration_tests::clock",
            "other_app.repositories",
        ]
    );
    assert_eq!(nested::settings::NestedConfig.name(), "nestedConfig");
}

#[test]
fn test_configuration_without_scan() {
    assert!(RootConfig::base_packages().is_empty());
    assert_eq!(RootConfig.name(), "rootConfiguration");
}
