use anyhow::Context;

use crate::models::Dentist;

/// Loads the dentist list shown on `/dentists`. No file means an empty list.
pub fn load_dentists(path: Option<&str>) -> anyhow::Result<Vec<Dentist>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dentist file {path}"))?;
    let dentists = Dentist::from_json_list(&json)
        .with_context(|| format!("failed to parse dentist file {path}"))?;

    tracing::info!(count = dentists.len(), path, "loaded dentist directory");
    Ok(dentists)
}
