//! `spider interpret`: read a single hand-placed card.

use std::path::Path;

use colored::Colorize;

use sd_core::{Card, LeafId, Point};

/// Place a card at `(x, y)` rotated by `angle` and print its reading.
pub fn run(layout: Option<&Path>, x: f64, y: f64, angle: f64) -> Result<(), String> {
    if !(x.is_finite() && y.is_finite() && angle.is_finite()) {
        return Err("position and angle must be finite numbers".into());
    }
    let layout = super::load_layout(layout)?;
    let leaf = LeafId::new(1).map_err(|e| e.to_string())?;
    let card = Card::place(1, leaf, Point::new(x, y), angle, &layout);

    println!(
        "  {} at ({x}, {y}), angle {angle}\u{b0}",
        "Leaf".bold()
    );
    let tip = card.tip();
    println!("  tip:     ({:.2}, {:.2})", tip.x, tip.y);
    println!("  mask:    {}", card.mask());
    println!("  reading: {}", card.interpretation);

    Ok(())
}
