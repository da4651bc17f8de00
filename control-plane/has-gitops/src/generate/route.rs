use has_api::{
    Component, InsecureEdgeTerminationPolicy, Route, RoutePort, RouteSpec,
    RouteTargetReference, TlsConfig, TlsTermination,
};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::ResourceExt;

use super::labels::{component_labels, component_meta};

/// Weight given to the backing Service; it is the only backend.
pub const ROUTE_BACKEND_WEIGHT: i32 = 100;

/// Externally reachable Route to the component's Service, or `None` when no
/// target port is declared.
pub fn generate_route(component: &Component) -> Option<Route> {
    let port = component.spec.exposed_port()?;
    let name = component.name_any();

    let mut metadata = component_meta(component);
    metadata.labels = Some(component_labels(&name));

    Some(Route {
        metadata,
        spec: RouteSpec {
            host: component.spec.route_host().map(str::to_string),
            path: None,
            to: RouteTargetReference {
                kind: "Service".to_string(),
                name,
                weight: Some(ROUTE_BACKEND_WEIGHT),
            },
            port: Some(RoutePort {
                target_port: IntOrString::Int(port),
            }),
            tls: Some(TlsConfig {
                termination: TlsTermination::Edge,
                insecure_edge_termination_policy: Some(
                    InsecureEdgeTerminationPolicy::Redirect,
                ),
            }),
        },
    })
}
