use has_api::Component;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, HTTPGetAction, PodSpec, PodTemplateSpec, Probe,
    TCPSocketAction,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{
    LabelSelector, ObjectMeta,
};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::ResourceExt;

use super::labels::{component_labels, component_meta};

/// Fixed name of the single container in every component pod.
pub const CONTAINER_NAME: &str = "container-image";

const PROBE_INITIAL_DELAY_SECS: i32 = 10;
const PROBE_PERIOD_SECS: i32 = 10;

pub fn generate_deployment(component: &Component) -> Deployment {
    let name = component.name_any();
    let spec = &component.spec;
    let labels = Some(component_labels(&name));

    let mut container = Container {
        name: CONTAINER_NAME.to_string(),
        image: spec.container_image().map(str::to_string),
        image_pull_policy: Some("Always".to_string()),
        env: spec.env.clone().filter(|env| !env.is_empty()),
        resources: spec.resources.clone(),
        ..Default::default()
    };
    if let Some(port) = spec.exposed_port() {
        container.ports = Some(vec![ContainerPort {
            container_port: port,
            ..Default::default()
        }]);
        container.readiness_probe = Some(readiness_probe(port));
        container.liveness_probe = Some(liveness_probe(port));
    }

    Deployment {
        metadata: component_meta(component),
        spec: Some(DeploymentSpec {
            replicas: Some(spec.desired_replicas()),
            selector: LabelSelector {
                match_labels: labels.clone(),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels,
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![container],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Raw TCP check: the pod takes traffic once the port accepts connections.
fn readiness_probe(port: i32) -> Probe {
    Probe {
        initial_delay_seconds: Some(PROBE_INITIAL_DELAY_SECS),
        period_seconds: Some(PROBE_PERIOD_SECS),
        tcp_socket: Some(TCPSocketAction {
            port: IntOrString::Int(port),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn liveness_probe(port: i32) -> Probe {
    Probe {
        initial_delay_seconds: Some(PROBE_INITIAL_DELAY_SECS),
        period_seconds: Some(PROBE_PERIOD_SECS),
        http_get: Some(HTTPGetAction {
            path: Some("/".to_string()),
            port: IntOrString::Int(port),
            ..Default::default()
        }),
        ..Default::default()
    }
}
