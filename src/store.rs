use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::info;

use crate::error::{Error, Result};
use crate::record::MenuDocument;

/// Writes `menu` into the collection at `path`, replacing the entry with the
/// same id or appending it, then re-sorts entries by month and course.
///
/// Other entries and any extra top-level keys are kept as they were, so
/// merging the same document twice leaves the file byte-identical.
pub fn merge_menu_file(path: &Path, menu: &MenuDocument) -> Result<()> {
    let mut root = if path.exists() {
        serde_json::from_str::<Map<String, Value>>(&fs::read_to_string(path)?)?
    } else {
        Map::new()
    };

    let mut menus = match root.get_mut("menus").map(Value::take) {
        Some(Value::Array(menus)) => menus,
        None => Vec::new(),
        Some(_) => {
            return Err(Error::InvalidCollection(format!(
                "\"menus\" in {} is not an array",
                path.display()
            )));
        }
    };

    let entry = serde_json::to_value(menu)?;
    match menus
        .iter_mut()
        .find(|m| m.get("id").and_then(Value::as_str) == Some(menu.id.as_str()))
    {
        Some(existing) => {
            info!("replacing menu {}", menu.id);
            *existing = entry;
        }
        None => {
            info!("adding menu {}", menu.id);
            menus.push(entry);
        }
    }

    menus.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
    root.insert("menus".to_string(), Value::Array(menus));

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(&root)?)?;
    Ok(())
}

fn sort_key(menu: &Value) -> (&str, &str) {
    let field = |key: &str| menu.get(key).and_then(Value::as_str).unwrap_or("");
    (field("month"), field("course"))
}
