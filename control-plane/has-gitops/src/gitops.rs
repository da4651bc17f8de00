//! On-disk GitOps layout for generated component manifests.
//!
//! Each component gets its own directory holding one YAML file per resource
//! plus a `kustomization.yaml` listing them, so the directory can be applied
//! as a unit. Committing and pushing the result is left to the caller.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::GitopsError;
use crate::generate::{ComponentManifests, ROUTE_FILE, SERVICE_FILE};

pub const KUSTOMIZATION_FILE: &str = "kustomization.yaml";
pub const KUSTOMIZE_API_VERSION: &str = "kustomize.config.k8s.io/v1beta1";

/// Where a component's directory lives under the output root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// `<root>/components/<name>/base`
    #[default]
    Component,
    /// `<root>/<name>`
    Flat,
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "component" | "components" => Ok(Layout::Component),
            "flat" => Ok(Layout::Flat),
            other => Err(format!("unknown layout: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct WriteOptions {
    pub layout: Layout,
    /// Write `kustomization.yaml` next to the resources
    pub kustomization: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Component,
            kustomization: true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Kustomization {
    pub api_version: String,
    pub kind: String,
    #[serde(default)]
    pub resources: Vec<String>,
}

impl Kustomization {
    pub fn new(resources: Vec<String>) -> Self {
        Self {
            api_version: KUSTOMIZE_API_VERSION.to_string(),
            kind: "Kustomization".to_string(),
            resources,
        }
    }
}

pub fn component_dir(root: &Path, layout: Layout, name: &str) -> PathBuf {
    match layout {
        Layout::Component => root.join("components").join(name).join("base"),
        Layout::Flat => root.join(name),
    }
}

/// Write every manifest of one component and return the written paths.
///
/// Regenerating a component that no longer exposes a port removes the
/// Service and Route files of the previous run. An existing
/// `kustomization.yaml` is then rewritten to match, even when
/// `opts.kustomization` is off.
pub fn write_component(
    root: &Path,
    manifests: &ComponentManifests,
    opts: WriteOptions,
) -> Result<Vec<PathBuf>, GitopsError> {
    let dir = component_dir(root, opts.layout, &manifests.name);
    fs::create_dir_all(&dir).map_err(|e| GitopsError::io(&dir, e))?;

    let resources = manifests.resources();
    let mut written = Vec::with_capacity(resources.len() + 1);
    for res in &resources {
        let path = dir.join(res.file_name());
        write_file(&path, &res.to_yaml()?)?;
        debug!(
            kind = res.kind(),
            path = %path.display(),
            "gitops: wrote resource"
        );
        written.push(path);
    }

    let mut pruned = false;
    if manifests.exposure.is_none() {
        for stale in [SERVICE_FILE, ROUTE_FILE] {
            pruned |= remove_if_present(&dir.join(stale))?;
        }
    }

    // A kustomization left over from an earlier run must not keep listing
    // files that were just pruned.
    let path = dir.join(KUSTOMIZATION_FILE);
    if opts.kustomization || (pruned && path.exists()) {
        let kustomization = Kustomization::new(
            resources.iter().map(|r| r.file_name().to_string()).collect(),
        );
        write_file(&path, &serde_yaml::to_string(&kustomization)?)?;
        written.push(path);
    }

    info!(
        name = %manifests.name,
        dir = %dir.display(),
        files = written.len(),
        "gitops: component written"
    );
    Ok(written)
}

fn write_file(path: &Path, content: &str) -> Result<(), GitopsError> {
    fs::write(path, content).map_err(|e| GitopsError::io(path, e))
}

/// Returns whether a file was actually removed.
fn remove_if_present(path: &Path) -> Result<bool, GitopsError> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!(path = %path.display(), "gitops: removed stale resource");
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(GitopsError::io(path, e)),
    }
}
