//! `spider play`: an interactive reading on stdin.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use sd_core::DrawPolicy;
use sd_reading::{ReadingConfig, ReadingSession};

/// Run the command loop until `quit` or end of input.
pub fn run(layout: Option<&Path>, seed: u64, lottery: bool) -> Result<(), String> {
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

    println!("  {} Spider Divination", "Starting".bold());
    println!("  Policy: {policy} | Seed: {seed}");
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if is_quit(input) {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}

fn is_quit(input: &str) -> bool {
    input
        .split_whitespace()
        .next()
        .is_some_and(|cmd| cmd.eq_ignore_ascii_case("quit") || cmd.eq_ignore_ascii_case("q"))
}
