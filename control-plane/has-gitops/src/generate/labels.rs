use std::collections::BTreeMap;

use has_api::Component;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::ResourceExt;

/// Label linking a component's pods, Service selector and Route.
pub const COMPONENT_LABEL: &str = "component";

/// The one label set every derived resource selects or carries.
pub fn component_labels(name: &str) -> BTreeMap<String, String> {
    let mut lbls = BTreeMap::new();
    lbls.insert(COMPONENT_LABEL.to_string(), name.to_string());
    lbls
}

/// Name and namespace shared by all resources derived from `component`.
pub fn component_meta(component: &Component) -> ObjectMeta {
    ObjectMeta {
        name: Some(component.name_any()),
        namespace: component.namespace(),
        ..Default::default()
    }
}
