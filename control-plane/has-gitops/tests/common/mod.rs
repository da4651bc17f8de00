#![allow(dead_code)]

use std::collections::BTreeMap;

use has_api::{Build, Component, ComponentSpec};
use k8s_openapi::api::core::v1::{EnvVar, ResourceRequirements};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

pub const NAME: &str = "test-component";
pub const NAMESPACE: &str = "test-namespace";
pub const IMAGE: &str = "quay.io/test/test-image:latest";

pub fn component(spec: ComponentSpec) -> Component {
    let mut c = Component::new(NAME, spec);
    c.metadata.namespace = Some(NAMESPACE.into());
    c
}

pub fn resources() -> ResourceRequirements {
    ResourceRequirements {
        limits: Some(BTreeMap::from([
            ("cpu".to_string(), Quantity("2M".into())),
            ("memory".to_string(), Quantity("1Gi".into())),
        ])),
        requests: Some(BTreeMap::from([
            ("cpu".to_string(), Quantity("1M".into())),
            ("memory".to_string(), Quantity("256Mi".into())),
        ])),
        ..Default::default()
    }
}

pub fn full_spec() -> ComponentSpec {
    ComponentSpec {
        component_name: NAME.into(),
        application: "test-application".into(),
        replicas: Some(3),
        target_port: Some(5000),
        build: Some(Build {
            container_image: IMAGE.into(),
        }),
        env: Some(vec![EnvVar {
            name: "test".into(),
            value: Some("value".into()),
            ..Default::default()
        }]),
        resources: Some(resources()),
        ..Default::default()
    }
}

pub const COMPONENT_YAML: &str = r#"apiVersion: appstudio.redhat.com/v1alpha1
kind: Component
metadata:
  name: test-component
  namespace: test-namespace
spec:
  componentName: test-component
  application: test-application
  replicas: 3
  targetPort: 5000
  route: example.com
  build:
    containerImage: quay.io/test/test-image:latest
  env:
    - name: test
      value: value
"#;

pub const BARE_COMPONENT_YAML: &str = r#"apiVersion: appstudio.redhat.com/v1alpha1
kind: Component
metadata:
  name: test-component
  namespace: test-namespace
spec: {}
"#;
