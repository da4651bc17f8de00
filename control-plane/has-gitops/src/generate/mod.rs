pub mod deployment;
pub mod labels;
pub mod route;
pub mod service;

pub use deployment::{CONTAINER_NAME, generate_deployment};
pub use labels::{COMPONENT_LABEL, component_labels};
pub use route::generate_route;
pub use service::generate_service;

use has_api::{Component, Route};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::ResourceExt;
use serde::Serialize;
use tracing::debug;

use crate::error::GitopsError;

pub const DEPLOYMENT_FILE: &str = "deployment.yaml";
pub const SERVICE_FILE: &str = "service.yaml";
pub const ROUTE_FILE: &str = "route.yaml";

#[derive(Clone, Debug, PartialEq)]
pub enum RenderedResource {
    Deployment(Deployment),
    Service(Service),
    Route(Route),
}

impl RenderedResource {
    pub fn kind(&self) -> &'static str {
        match self {
            RenderedResource::Deployment(_) => "Deployment",
            RenderedResource::Service(_) => "Service",
            RenderedResource::Route(_) => "Route",
        }
    }

    /// File the resource is stored in inside a component directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            RenderedResource::Deployment(_) => DEPLOYMENT_FILE,
            RenderedResource::Service(_) => SERVICE_FILE,
            RenderedResource::Route(_) => ROUTE_FILE,
        }
    }

    pub fn to_yaml(&self) -> Result<String, GitopsError> {
        match self {
            RenderedResource::Deployment(d) => to_yaml(d),
            RenderedResource::Service(s) => to_yaml(s),
            RenderedResource::Route(r) => to_yaml(r),
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, GitopsError> {
        let value = match self {
            RenderedResource::Deployment(d) => serde_json::to_value(d),
            RenderedResource::Service(s) => serde_json::to_value(s),
            RenderedResource::Route(r) => serde_json::to_value(r),
        }?;
        Ok(value)
    }
}

fn to_yaml<T: Serialize>(obj: &T) -> Result<String, GitopsError> {
    Ok(serde_yaml::to_string(obj)?)
}

/// Network exposure of a component. Service and Route only ever exist as a
/// pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Exposure {
    pub service: Service,
    pub route: Route,
}

/// Everything derived from one Component.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentManifests {
    pub name: String,
    pub deployment: Deployment,
    pub exposure: Option<Exposure>,
}

impl ComponentManifests {
    pub fn generate(component: &Component) -> Self {
        let name = component.name_any();
        let deployment = generate_deployment(component);
        let exposure =
            match (generate_service(component), generate_route(component)) {
                (Some(service), Some(route)) => {
                    Some(Exposure { service, route })
                }
                _ => None,
            };
        debug!(
            %name,
            namespace = ?component.namespace(),
            exposed = exposure.is_some(),
            "generate: component manifests derived"
        );
        Self {
            name,
            deployment,
            exposure,
        }
    }

    /// Resources in emission order: Deployment, then Service and Route.
    pub fn resources(&self) -> Vec<RenderedResource> {
        let mut resources =
            vec![RenderedResource::Deployment(self.deployment.clone())];
        if let Some(exp) = &self.exposure {
            resources.push(RenderedResource::Service(exp.service.clone()));
            resources.push(RenderedResource::Route(exp.route.clone()));
        }
        resources
    }

    /// All resources as one multi-document YAML stream.
    pub fn render_yaml(&self) -> Result<String, GitopsError> {
        let mut out = String::new();
        for res in self.resources() {
            out.push_str("---\n");
            out.push_str(&res.to_yaml()?);
        }
        Ok(out)
    }

    /// All resources wrapped in a `v1/List`.
    pub fn render_json(&self) -> Result<serde_json::Value, GitopsError> {
        render_json_list(std::slice::from_ref(self))
    }
}

/// Resources of every component, in input order, wrapped in one `v1/List`.
pub fn render_json_list(
    manifests: &[ComponentManifests],
) -> Result<serde_json::Value, GitopsError> {
    let items = manifests
        .iter()
        .flat_map(ComponentManifests::resources)
        .map(|r| r.to_json())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(serde_json::json!({
        "apiVersion": "v1",
        "kind": "List",
        "items": items,
    }))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::collections::BTreeMap;

    use has_api::{Build, Component, ComponentSpec};
    use k8s_openapi::api::core::v1::{EnvVar, ResourceRequirements};
    use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

    fn with_namespace(mut c: Component) -> Component {
        c.metadata.namespace = Some("test-namespace".into());
        c
    }

    /// Only name and namespace set.
    pub fn bare_component() -> Component {
        with_namespace(Component::new(
            "test-component",
            ComponentSpec::default(),
        ))
    }

    /// Port, image, replicas, env and resources set.
    pub fn exposed_component() -> Component {
        let limits = BTreeMap::from([
            ("cpu".to_string(), Quantity("2M".into())),
            ("memory".to_string(), Quantity("1Gi".into())),
        ]);
        let requests = BTreeMap::from([
            ("cpu".to_string(), Quantity("1M".into())),
            ("memory".to_string(), Quantity("256Mi".into())),
        ]);
        with_namespace(Component::new(
            "test-component",
            ComponentSpec {
                component_name: "test-component".into(),
                application: "test-application".into(),
                replicas: Some(3),
                target_port: Some(5000),
                build: Some(Build {
                    container_image: "quay.io/test/test-image:latest".into(),
                }),
                env: Some(vec![EnvVar {
                    name: "test".into(),
                    value: Some("value".into()),
                    ..Default::default()
                }]),
                resources: Some(ResourceRequirements {
                    limits: Some(limits),
                    requests: Some(requests),
                    ..Default::default()
                }),
                ..Default::default()
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{bare_component, exposed_component};
    use super::*;

    #[test]
    fn bare_component_yields_only_a_deployment() {
        let m = ComponentManifests::generate(&bare_component());
        assert!(m.exposure.is_none());
        let files: Vec<_> =
            m.resources().iter().map(|r| r.file_name()).collect();
        assert_eq!(files, vec![DEPLOYMENT_FILE]);
    }

    #[test]
    fn exposed_component_yields_all_three_in_order() {
        let m = ComponentManifests::generate(&exposed_component());
        let kinds: Vec<_> = m.resources().iter().map(|r| r.kind()).collect();
        assert_eq!(kinds, vec!["Deployment", "Service", "Route"]);
    }

    #[test]
    fn resources_share_name_namespace_and_label() {
        let m = ComponentManifests::generate(&exposed_component());
        let exp = m.exposure.as_ref().unwrap();
        for meta in [&m.deployment.metadata, &exp.service.metadata] {
            assert_eq!(meta.name.as_deref(), Some("test-component"));
            assert_eq!(meta.namespace.as_deref(), Some("test-namespace"));
        }
        assert_eq!(exp.route.metadata.name.as_deref(), Some("test-component"));
        assert_eq!(
            exp.route.metadata.namespace.as_deref(),
            Some("test-namespace")
        );

        let pod_labels = m
            .deployment
            .spec
            .as_ref()
            .and_then(|s| s.template.metadata.as_ref())
            .and_then(|md| md.labels.clone());
        let selector =
            exp.service.spec.as_ref().and_then(|s| s.selector.clone());
        assert_eq!(pod_labels, selector);
        assert_eq!(exp.route.metadata.labels, selector);
        assert_eq!(
            exp.route.spec.to.name,
            exp.service.metadata.name.clone().unwrap()
        );
    }

    #[test]
    fn yaml_stream_carries_type_meta() {
        let m = ComponentManifests::generate(&exposed_component());
        let yaml = m.render_yaml().unwrap();
        assert_eq!(yaml.matches("---\n").count(), 3);
        assert!(yaml.contains("apiVersion: apps/v1"));
        assert!(yaml.contains("kind: Deployment"));
        assert!(yaml.contains("kind: Service"));
        assert!(yaml.contains("apiVersion: route.openshift.io/v1"));
    }

    #[test]
    fn json_list_holds_every_resource() {
        let m = ComponentManifests::generate(&bare_component());
        let list = m.render_json().unwrap();
        assert_eq!(list["kind"], "List");
        let items = list["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["kind"], "Deployment");
        assert_eq!(items[0]["spec"]["replicas"], 1);
    }

    #[test]
    fn json_list_concatenates_components_in_order() {
        let mut other = bare_component();
        other.metadata.name = Some("other-component".into());
        let all = [
            ComponentManifests::generate(&exposed_component()),
            ComponentManifests::generate(&other),
        ];
        let list = render_json_list(&all).unwrap();
        assert_eq!(list["apiVersion"], "v1");
        let names: Vec<_> = list["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| {
                format!(
                    "{}/{}",
                    i["kind"].as_str().unwrap(),
                    i["metadata"]["name"].as_str().unwrap()
                )
            })
            .collect();
        assert_eq!(
            names,
            vec![
                "Deployment/test-component",
                "Service/test-component",
                "Route/test-component",
                "Deployment/other-component",
            ]
        );
    }
}
