use has_api::Component;
use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::ResourceExt;

use super::labels::{component_labels, component_meta};

/// Service in front of the component's pods, or `None` when no target port
/// is declared.
pub fn generate_service(component: &Component) -> Option<Service> {
    let port = component.spec.exposed_port()?;
    Some(Service {
        metadata: component_meta(component),
        spec: Some(ServiceSpec {
            selector: Some(component_labels(&component.name_any())),
            ports: Some(vec![ServicePort {
                port,
                target_port: Some(IntOrString::Int(port)),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    })
}
