use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Documentation injected after keys that are not self-explanatory.
fn doc_for_key(key: &str) -> Option<&'static str> {
    match key {
        "backend" => Some(
            "  # backend options:\n\
             #   local → SQLite database at `database`\n\
             #   http  → REST API at `api_base_url`\n",
        ),
        "schedules" => Some(
            "  # contracted daily hours per user id, e.g.\n\
             #   schedules:\n\
             #     7: \"06:00\"\n",
        ),
        _ => None,
    }
}

/// Add every configuration key missing from the file at `path`, using the
/// default values, and keep the keys already present untouched.
///
/// Returns the names of the keys that were added (empty → nothing to do).
pub fn fill_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;

    let mut yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
    let defaults = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(e.to_string()))?;

    let (Some(map), Some(default_map)) = (yaml.as_mapping_mut(), defaults.as_mapping()) else {
        return Err(AppError::Config(format!(
            "{}: expected a YAML mapping",
            path.display()
        )));
    };

    let mut added = Vec::new();
    for (key, value) in default_map {
        if !map.contains_key(key) {
            map.insert(key.clone(), value.clone());
            if let Some(k) = key.as_str() {
                added.push(k.to_string());
            }
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&yaml).map_err(|_| AppError::ConfigSave)?;

    // Inject documentation comment right after the newly added keys
    let mut new_content = String::new();
    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');

        if let Some((key, _)) = line.split_once(':')
            && added.iter().any(|a| a == key)
            && let Some(doc) = doc_for_key(key)
        {
            new_content.push_str(doc);
        }
    }

    fs::write(path, new_content).map_err(|_| AppError::ConfigSave)?;
    Ok(added)
}
