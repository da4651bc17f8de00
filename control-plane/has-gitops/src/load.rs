use has_api::Component;
use serde::Deserialize;

use crate::error::GitopsError;

/// Parse every Component in a (possibly multi-document) YAML stream.
/// Empty documents are skipped; a Component without a name, or with a name
/// that is not a single path segment, is rejected.
pub fn load_components(input: &str) -> Result<Vec<Component>, GitopsError> {
    let mut components = Vec::new();
    for (idx, doc) in serde_yaml::Deserializer::from_str(input).enumerate() {
        let value = serde_yaml::Value::deserialize(doc)?;
        if value.is_null() {
            continue;
        }
        let component: Component = serde_yaml::from_value(value)?;
        let name = component.metadata.name.as_deref().unwrap_or_default();
        if name.is_empty() {
            return Err(GitopsError::MissingName(idx));
        }
        if !is_path_segment(name) {
            return Err(GitopsError::InvalidName {
                index: idx,
                name: name.to_string(),
            });
        }
        components.push(component);
    }
    Ok(components)
}

/// The name becomes a directory under the output root.
fn is_path_segment(name: &str) -> bool {
    name != "." && !name.contains("..") && !name.contains(['/', '\\'])
}
