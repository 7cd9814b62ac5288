//! Subcommand implementations.

pub mod cast;
pub mod interpret;
pub mod layout;
pub mod play;

use std::path::Path;

use sd_core::BowlLayout;

/// Load the bowl layout from `path`, or the standard one.
/// Either way the layout is validated before use.
fn load_layout(path: Option<&Path>) -> Result<BowlLayout, String> {
    let layout = match path {
        Some(path) => BowlLayout::from_json_file(path)
            .map_err(|e| format!("{}: {e}", path.display()))?,
        None => BowlLayout::standard(),
    };
    layout.validate().map_err(|e| e.to_string())?;
    tracing::debug!(radius = layout.radius, "bowl layout loaded");
    Ok(layout)
}
