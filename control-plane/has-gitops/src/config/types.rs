use std::path::PathBuf;

use envconfig::Envconfig;

use crate::gitops::{Layout, WriteOptions};

#[derive(Envconfig, Clone, Debug)]
pub struct GitopsConfig {
    /// Root directory generated component directories are written under.
    /// Env: HAS_GITOPS_OUTPUT_DIR
    #[envconfig(from = "HAS_GITOPS_OUTPUT_DIR", default = "gitops")]
    pub output_dir: PathBuf,

    /// component | flat
    #[envconfig(from = "HAS_GITOPS_LAYOUT", default = "component")]
    pub layout: Layout,

    #[envconfig(from = "HAS_GITOPS_KUSTOMIZATION", default = "true")]
    pub kustomization: bool,

    /// Default tracing directive when RUST_LOG is unset
    #[envconfig(from = "HAS_GITOPS_LOG", default = "info")]
    pub log: String,
}

impl GitopsConfig {
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            layout: self.layout,
            kustomization: self.kustomization,
        }
    }
}
