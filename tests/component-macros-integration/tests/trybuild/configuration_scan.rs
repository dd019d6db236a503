use component_macros::{component, Configuration};
use infrastructure_common::Configuration as _;

mod beans {
    use component_macros::component;

    #[component]
    #[derive(Debug, Default)]
    pub struct Repository;
}

#[component]
#[derive(Debug, Default)]
pub struct Root;

#[derive(Debug, Default, Configuration)]
#[component_scan("self::beans")]
#[component_scan("com.example.services")]
pub struct AppConfig;

fn main() {
    let packages = AppConfig::base_packages();
    assert_eq!(packages.len(), 2);
    assert!(packages[0].ends_with("::beans"));
    assert_eq!(packages[1], "com.example.services");
}
