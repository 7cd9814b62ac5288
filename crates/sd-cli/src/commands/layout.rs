//! `spider layout`: print the active bowl layout.

use std::path::Path;

/// Print the validated layout as pretty JSON.
pub fn run(layout: Option<&Path>) -> Result<(), String> {
    let layout = super::load_layout(layout)?;
    let out = serde_json::to_string_pretty(&layout).map_err(|e| e.to_string())?;
    println!("{out}");
    Ok(())
}
