use has_api::Component;
use kube::core::CustomResourceExt;

fn main() -> anyhow::Result<()> {
    let crd = Component::crd();
    let yaml = serde_yaml::to_string(&crd)?;
    println!("{}", yaml);
    Ok(())
}
