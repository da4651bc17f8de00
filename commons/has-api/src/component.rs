use k8s_openapi::api::core::v1::{EnvVar, ResourceRequirements};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Condition;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    CustomResource, Deserialize, Serialize, Clone, Debug, Default, JsonSchema,
    PartialEq,
)]
#[kube(
    group = "appstudio.redhat.com",
    version = "v1alpha1",
    kind = "Component",
    plural = "components",
    shortname = "hascmp",
    shortname = "hc",
    shortname = "comp",
    namespaced,
    status = "ComponentStatus",
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    /// Name of the component inside its application
    #[serde(default)]
    pub component_name: String,
    /// Application the component belongs to
    #[serde(default)]
    pub application: String,
    /// Where the component comes from (git repository or prebuilt image)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ComponentSource>,
    /// Relative path inside the git repository holding the component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Compute resources, copied verbatim onto the container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    /// Desired replica count. Absent and 0 both mean "unset" and deploy one
    /// replica; zero replicas cannot be expressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    /// Port to expose the component on; absent or 0 disables Service/Route
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_port: Option<i32>,
    /// Hostname for the Route; empty lets the platform assign one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Environment variables, in container order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<EnvVar>>,
    /// Build artifacts associated with the component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<Build>,
}

/// Exactly one source kind. Serialized as `{git: {...}}` or `{image: {...}}`.
#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ComponentSource {
    Git(GitSource),
    Image(ImageSource),
}

impl ComponentSource {
    pub fn git(url: impl Into<String>) -> Self {
        Self::Git(GitSource {
            url: url.into(),
            ..Default::default()
        })
    }

    pub fn image(container_image: impl Into<String>) -> Self {
        Self::Image(ImageSource {
            container_image: container_image.into(),
        })
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GitSource {
    /// Repository to create the component from
    pub url: String,
    /// Secret holding an access token for private repositories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Devfile to use instead of the one in the repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devfile_url: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageSource {
    /// Container image to create the component from
    pub container_image: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    /// Image produced by the component build; empty until a build ran
    #[serde(default)]
    pub container_image: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
    /// Built container image associated with the component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_image: Option<String>,
    /// Devfile model of the component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devfile: Option<String>,
}

impl ComponentSpec {
    /// Port to expose, or `None` when no network exposure was requested.
    pub fn exposed_port(&self) -> Option<i32> {
        self.target_port.filter(|p| *p != 0)
    }

    /// Explicit route hostname, `None` when the platform should pick one.
    pub fn route_host(&self) -> Option<&str> {
        self.route.as_deref().filter(|h| !h.is_empty())
    }

    /// Image from the last build, `None` while no build has produced one.
    pub fn container_image(&self) -> Option<&str> {
        self.build
            .as_ref()
            .map(|b| b.container_image.as_str())
            .filter(|i| !i.is_empty())
    }

    /// Replica count to deploy. Never below 1: zero means "unset".
    pub fn desired_replicas(&self) -> i32 {
        self.replicas.filter(|r| *r > 0).unwrap_or(1)
    }
}
