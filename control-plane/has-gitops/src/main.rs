use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use envconfig::Envconfig;
use has_gitops::{
    ComponentManifests, config::GitopsConfig, generate::render_json_list,
    gitops, init_tracing, load::load_components,
};
use tracing::{info, warn};

#[derive(clap::Parser, Clone, Debug)]
#[clap(author, version, about, long_about = None)]
struct HasGitopsCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Clone, Debug)]
enum Commands {
    /// Write Deployment/Service/Route manifests of each Component into a
    /// GitOps directory
    #[clap(aliases = &["gen", "g"])]
    Generate {
        /// Component YAML file, or `-` for stdin
        #[arg(short, long)]
        file: clap_stdin::FileOrStdin,
        /// Output root; defaults to HAS_GITOPS_OUTPUT_DIR
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write into `<output>/<name>` instead of
        /// `<output>/components/<name>/base`
        #[arg(long)]
        flat: bool,
        /// Skip writing kustomization.yaml
        #[arg(long)]
        no_kustomization: bool,
    },
    /// Print the manifests of each Component to stdout
    #[clap(aliases = &["r"])]
    Render {
        /// Component YAML file, or `-` for stdin
        #[arg(short, long)]
        file: clap_stdin::FileOrStdin,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        output: OutputFormat,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Yaml,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = HasGitopsCli::parse();
    let cfg = GitopsConfig::init_from_env()?;
    init_tracing(&cfg.log);

    match cli.command {
        Commands::Generate {
            file,
            output,
            flat,
            no_kustomization,
        } => {
            let components = load_components(&read_input(file)?)?;
            if components.is_empty() {
                warn!("generate: no Component found in input");
            }
            let root = output.unwrap_or_else(|| cfg.output_dir.clone());
            let mut opts = cfg.write_options();
            if flat {
                opts.layout = gitops::Layout::Flat;
            }
            if no_kustomization {
                opts.kustomization = false;
            }
            info!(
                root = %root.display(),
                count = components.len(),
                ?opts,
                "generate: begin"
            );
            for component in &components {
                let manifests = ComponentManifests::generate(component);
                let written = gitops::write_component(&root, &manifests, opts)
                    .with_context(|| {
                        format!("writing component {}", manifests.name)
                    })?;
                for path in written {
                    println!("{}", path.display());
                }
            }
        }
        Commands::Render { file, output } => {
            let components = load_components(&read_input(file)?)?;
            let manifests: Vec<ComponentManifests> = components
                .iter()
                .map(ComponentManifests::generate)
                .collect();
            match output {
                OutputFormat::Yaml => {
                    for m in &manifests {
                        print!("{}", m.render_yaml()?);
                    }
                }
                OutputFormat::Json => {
                    let list = render_json_list(&manifests)?;
                    println!("{}", serde_json::to_string_pretty(&list)?);
                }
            }
        }
    }
    Ok(())
}

fn read_input(file: clap_stdin::FileOrStdin) -> anyhow::Result<String> {
    let mut content = String::new();
    file.into_reader()
        .context("opening component input")?
        .read_to_string(&mut content)
        .context("reading component input")?;
    Ok(content)
}
