//! Reading session management.
//!
//! `ReadingSession` owns everything that changes between casts: the random
//! source, the draw policy, the lottery draw history, the current tableau,
//! and the selected card. Front ends forward raw input lines to
//! [`ReadingSession::process`].

use rand::SeedableRng;
use rand::rngs::StdRng;

use sd_core::{
    BowlLayout, Card, DrawHistory, DrawPolicy, Landmark, Point, Tableau, generate_tableau,
};

use crate::config::ReadingConfig;
use crate::error::{ReadingError, ReadingResult};

/// An interactive divination reading.
pub struct ReadingSession {
    layout: BowlLayout,
    policy: DrawPolicy,
    history: DrawHistory,
    tableau: Tableau,
    selected: Option<u32>,
    casts: u32,
    rng: StdRng,
}

impl ReadingSession {
    /// Start a session. Fails if the configured layout cannot host a cast.
    pub fn new(config: ReadingConfig) -> ReadingResult<Self> {
        config.layout.validate()?;
        Ok(Self {
            layout: config.layout,
            policy: config.policy,
            history: DrawHistory::new(),
            tableau: Tableau::default(),
            selected: None,
            casts: 0,
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// Get the bowl layout.
    pub fn layout(&self) -> &BowlLayout {
        &self.layout
    }

    /// Get the current draw policy.
    pub fn policy(&self) -> DrawPolicy {
        self.policy
    }

    /// Get the lottery draw history.
    pub fn history(&self) -> &DrawHistory {
        &self.history
    }

    /// Get the current tableau (empty before the first cast).
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Number of casts since the session started or was last reset.
    pub fn casts(&self) -> u32 {
        self.casts
    }

    /// Get the selected card.
    pub fn selected(&self) -> Option<&Card> {
        self.selected.and_then(|id| self.tableau.get(id))
    }

    /// Cast a new tableau, replacing the current one.
    pub fn cast(&mut self) -> &Tableau {
        self.tableau = generate_tableau(self.policy, &mut self.history, &self.layout, &mut self.rng);
        self.selected = None;
        self.casts += 1;
        &self.tableau
    }

    /// Clear the bowl and forget every lottery draw.
    pub fn reset(&mut self) {
        tracing::info!(casts = self.casts, "reading reset");
        self.tableau = Tableau::default();
        self.selected = None;
        self.history.clear();
        self.casts = 0;
    }

    /// Switch lottery mode. Turning it on starts a fresh draw history.
    pub fn set_lottery(&mut self, on: bool) {
        self.policy = if on {
            DrawPolicy::Lottery
        } else {
            DrawPolicy::Normal
        };
        if on {
            self.history.clear();
        }
        tracing::info!(policy = %self.policy, "draw policy changed");
    }

    /// Select a card by its sequence number.
    pub fn select(&mut self, id: u32) -> ReadingResult<&Card> {
        if self.tableau.is_empty() {
            return Err(ReadingError::NoTableau);
        }
        let card = self.tableau.get(id).ok_or(ReadingError::CardNotFound(id))?;
        self.selected = Some(card.id);
        Ok(card)
    }

    /// Select the topmost card under `p`, if any.
    pub fn select_at(&mut self, p: Point) -> ReadingResult<Option<&Card>> {
        if self.tableau.is_empty() {
            return Err(ReadingError::NoTableau);
        }
        let Some(id) = self.tableau.card_at(p).map(|c| c.id) else {
            return Ok(None);
        };
        self.selected = Some(id);
        Ok(self.tableau.get(id))
    }

    /// The landmark near `p`, if any.
    pub fn landmark_at(&self, p: Point) -> Option<Landmark> {
        self.layout.landmark_near(p)
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> ReadingResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "cast" | "spider" => Ok(self.do_cast()),
            "lottery" => self.do_lottery(rest),
            "reset" => {
                self.reset();
                Ok("The bowl is covered. Draw history cleared.".to_string())
            }
            "list" => self.do_list(),
            "select" => self.do_select(rest),
            "pick" => self.do_pick(rest),
            "at" => self.do_at(rest),
            "show" => self.do_show(),
            "status" => Ok(self.do_status()),
            "help" => Ok(help_text().to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(ReadingError::UnknownCommand(parts[0].to_string())),
        }
    }

    fn do_cast(&mut self) -> String {
        let policy = self.policy;
        let tableau = self.cast();
        let mut out = format!("Cast {} leaves ({policy}):", tableau.len());
        for card in tableau {
            out.push('\n');
            out.push_str(&card_line(card));
        }
        out
    }

    fn do_lottery(&mut self, rest: &str) -> ReadingResult<String> {
        let on = match rest.to_lowercase().as_str() {
            "" => self.policy != DrawPolicy::Lottery,
            "on" => true,
            "off" => false,
            other => {
                return Err(ReadingError::InvalidArgument(format!(
                    "expected 'on' or 'off', got '{other}'"
                )));
            }
        };
        self.set_lottery(on);
        Ok(if on {
            "Lottery mode on: 6 leaves per cast, no repeats until the deck runs out.".to_string()
        } else {
            "Lottery mode off.".to_string()
        })
    }

    fn do_list(&self) -> ReadingResult<String> {
        if self.tableau.is_empty() {
            return Err(ReadingError::NoTableau);
        }
        let lines: Vec<String> = self
            .tableau
            .iter()
            .map(|card| {
                let marker = if self.selected == Some(card.id) { "*" } else { " " };
                format!("{marker} {}", card_line(card).trim_start())
            })
            .collect();
        Ok(lines.join("\n"))
    }

    fn do_select(&mut self, rest: &str) -> ReadingResult<String> {
        let id: u32 = rest
            .parse()
            .map_err(|_| ReadingError::InvalidArgument("usage: select <card number>".to_string()))?;
        let card = self.select(id)?;
        Ok(card_detail(card))
    }

    fn do_pick(&mut self, rest: &str) -> ReadingResult<String> {
        let p = parse_point(rest, "pick")?;
        Ok(match self.select_at(p)? {
            Some(card) => card_detail(card),
            None => format!("No leaf at ({:.0}, {:.0}).", p.x, p.y),
        })
    }

    fn do_at(&self, rest: &str) -> ReadingResult<String> {
        let p = parse_point(rest, "at")?;
        if let Some(landmark) = self.landmark_at(p) {
            return Ok(format!("Hovering over: {landmark}"));
        }
        Ok(match self.tableau.card_at(p) {
            Some(card) => format!("Card: {}", card.leaf.fallback_title()),
            None => "Ready".to_string(),
        })
    }

    fn do_show(&self) -> ReadingResult<String> {
        if self.tableau.is_empty() {
            return Err(ReadingError::NoTableau);
        }
        let card = self.selected().ok_or(ReadingError::NoSelection)?;
        Ok(card_detail(card))
    }

    fn do_status(&self) -> String {
        format!(
            "Policy: {} | Casts: {} | Leaves on the bowl: {} | Lottery draws: {}/{}",
            self.policy,
            self.casts,
            self.tableau.len(),
            self.history.len(),
            sd_core::TOTAL_LEAVES,
        )
    }
}

fn parse_point(rest: &str, cmd: &str) -> ReadingResult<Point> {
    let usage = || ReadingError::InvalidArgument(format!("usage: {cmd} <x> <y>"));
    let mut parts = rest.split_whitespace();
    let x: f64 = parts.next().and_then(|s| s.parse().ok()).ok_or_else(usage)?;
    let y: f64 = parts.next().and_then(|s| s.parse().ok()).ok_or_else(usage)?;
    if parts.next().is_some() {
        return Err(usage());
    }
    Ok(Point::new(x, y))
}

fn card_line(card: &Card) -> String {
    format!(
        "  #{} {} at ({:.0}, {:.0}) {:.0}\u{b0}: {}",
        card.id,
        card.leaf.fallback_title(),
        card.center.x,
        card.center.y,
        card.angle,
        card.interpretation,
    )
}

fn card_detail(card: &Card) -> String {
    format!(
        "{} (#{})\n  position: ({:.1}, {:.1}), angle {:.0}\u{b0}\n  reading:  {} [mask {}]",
        card.leaf.fallback_title(),
        card.id,
        card.center.x,
        card.center.y,
        card.angle,
        card.interpretation,
        card.mask(),
    )
}

fn help_text() -> &'static str {
    "\
Commands:
  cast | spider      drop a new tableau into the bowl
  lottery [on|off]   toggle lottery mode (6 leaves, no repeats across casts)
  reset              cover the bowl and clear the draw history
  list               list the leaves in the current tableau
  select <n>         select leaf number n
  pick <x> <y>       select the topmost leaf under a point
  at <x> <y>         show what lies under a point
  show               show the selected leaf
  status             show session status
  quit | q           leave the reading"
}
