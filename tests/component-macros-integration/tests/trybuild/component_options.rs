use component_macros::component;
use infrastructure_common::{Component, ComponentCatalog};

#[component(singleton, lazy, name = "cache")]
#[derive(Debug, Default)]
pub struct Cache;

#[component(transient, enabled)]
#[derive(Debug, Default)]
pub struct Request;

fn main() {
    assert_eq!(Cache.name(), "cache");
    assert_eq!(Request.name(), "request");
    assert_eq!(ComponentCatalog::global().len(), 2);
}
