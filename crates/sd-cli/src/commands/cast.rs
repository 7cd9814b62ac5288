//! `spider cast`: drop one or more tableaux and print them.

use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use sd_core::{Card, DrawPolicy, Tableau};
use sd_reading::{ReadingConfig, ReadingSession};

#[derive(Serialize)]
struct CastRecord<'a> {
    cast: u32,
    policy: DrawPolicy,
    cards: Vec<CardRecord<'a>>,
}

#[derive(Serialize)]
struct CardRecord<'a> {
    #[serde(flatten)]
    card: &'a Card,
    mask: u8,
    message: String,
}

/// Cast `draws` tableaux from `seed` and print them as a table or JSON.
pub fn run(
    layout: Option<&Path>,
    seed: u64,
    lottery: bool,
    draws: u32,
    json: bool,
) -> Result<(), String> {
    if draws == 0 {
        return Err("--draws must be at least 1".into());
    }

    let layout = super::load_layout(layout)?;
    let policy = if lottery {
        DrawPolicy::Lottery
    } else {
        DrawPolicy::Normal
    };
    let config = ReadingConfig::default()
        .with_seed(seed)
        .with_policy(policy)
        .with_layout(layout);
    let mut session =
        ReadingSession::new(config).map_err(|e| format!("failed to start reading: {e}"))?;

    let tableaux: Vec<Tableau> = (0..draws).map(|_| session.cast().clone()).collect();

    if json {
        let records: Vec<CastRecord<'_>> = tableaux
            .iter()
            .zip(1..)
            .map(|(tableau, cast)| CastRecord {
                cast,
                policy,
                cards: tableau
                    .iter()
                    .map(|card| CardRecord {
                        card,
                        mask: card.mask(),
                        message: card.message(),
                    })
                    .collect(),
            })
            .collect();
        let out = serde_json::to_string_pretty(&records).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    for (tableau, cast) in tableaux.iter().zip(1..) {
        println!(
            "  {} {cast} ({policy}, seed {seed}): {} leaves",
            "Cast".bold(),
            tableau.len()
        );
        println!("{}", render_table(tableau));
        println!();
    }

    if lottery {
        println!(
            "  Lottery draws: {}/{}",
            session.history().len(),
            sd_core::TOTAL_LEAVES
        );
    }

    Ok(())
}

fn render_table(tableau: &Tableau) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Leaf", "X", "Y", "Angle", "Mask", "Reading"]);

    for card in tableau {
        table.add_row(vec![
            card.id.to_string(),
            card.leaf.to_string(),
            format!("{:.1}", card.center.x),
            format!("{:.1}", card.center.y),
            format!("{:.0}", card.angle),
            card.mask().to_string(),
            card.interpretation.to_string(),
        ]);
    }
    table
}
