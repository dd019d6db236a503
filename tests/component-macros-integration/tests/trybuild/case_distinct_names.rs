use component_macros::component;
use infrastructure_common::ComponentCatalog;

#[component]
#[derive(Debug, Default)]
pub struct URLHolder;

#[component]
#[derive(Debug, Default)]
pub struct UrlHolder;

fn main() {
    let names: Vec<String> = ComponentCatalog::global()
        .descriptors()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"URLHolder".to_string()));
    assert!(names.contains(&"urlHolder".to_string()));
}
