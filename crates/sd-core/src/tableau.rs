//! Drawing and dropping leaves into the bowl.
//!
//! A tableau is one cast: 4 to 7 distinct leaves (always 6 in lottery mode)
//! scattered at random inside the bowl annulus and read on landing.

use std::collections::BTreeSet;
use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bowl::BowlLayout;
use crate::card::{Card, LeafId, TOTAL_LEAVES};
use crate::geometry::Point;

/// Smallest normal tableau.
pub const MIN_TABLEAU_SIZE: usize = 4;

/// Largest normal tableau.
pub const MAX_TABLEAU_SIZE: usize = 7;

/// Size of every lottery tableau.
pub const LOTTERY_TABLEAU_SIZE: usize = 6;

/// How leaf identities are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawPolicy {
    /// Leaves are unique within a tableau only.
    #[default]
    Normal,
    /// Leaves do not repeat across tableaux until the deck runs out.
    Lottery,
}

impl std::fmt::Display for DrawPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Lottery => write!(f, "lottery"),
        }
    }
}

/// Leaves already drawn under the lottery policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawHistory {
    used: BTreeSet<LeafId>,
}

impl DrawHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `leaf` has been drawn since the last clear.
    pub fn contains(&self, leaf: LeafId) -> bool {
        self.used.contains(&leaf)
    }

    /// Record a drawn leaf.
    pub fn insert(&mut self, leaf: LeafId) {
        self.used.insert(leaf);
    }

    /// Forget every drawn leaf.
    pub fn clear(&mut self) {
        self.used.clear();
    }

    /// Number of leaves drawn since the last clear.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// True when nothing has been drawn since the last clear.
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// True once every leaf has been drawn.
    pub fn is_exhausted(&self) -> bool {
        self.used.len() >= TOTAL_LEAVES as usize
    }
}

/// An ordered set of cards from one cast. Later cards lie on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tableau {
    cards: Vec<Card>,
}

impl Tableau {
    /// The cards in drop order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True before the first cast or after a reset.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the cards in drop order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Look up a card by its sequence number.
    pub fn get(&self, id: u32) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// The topmost card whose footprint contains `p`.
    pub fn card_at(&self, p: Point) -> Option<&Card> {
        self.cards.iter().rev().find(|c| c.contains_point(p))
    }
}

impl<'a> IntoIterator for &'a Tableau {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// How many leaves a cast under `policy` drops.
pub fn roll_tableau_size<R: Rng>(policy: DrawPolicy, rng: &mut R) -> usize {
    match policy {
        DrawPolicy::Lottery => LOTTERY_TABLEAU_SIZE,
        DrawPolicy::Normal => rng.random_range(MIN_TABLEAU_SIZE..=MAX_TABLEAU_SIZE),
    }
}

/// Pick one leaf not yet in `spread` (and, for lottery, not in `history`).
///
/// When lottery has used up the deck, the history is cleared and the draw
/// falls back to every leaf not already in this spread.
fn draw_leaf<R: Rng>(
    policy: DrawPolicy,
    spread: &BTreeSet<LeafId>,
    history: &mut DrawHistory,
    rng: &mut R,
) -> LeafId {
    let lottery = policy == DrawPolicy::Lottery;
    let mut pool: Vec<LeafId> = LeafId::all()
        .filter(|l| !spread.contains(l) && !(lottery && history.contains(*l)))
        .collect();

    if pool.is_empty() && lottery {
        tracing::debug!(drawn = history.len(), "lottery deck exhausted, reshuffling");
        history.clear();
        pool = LeafId::all().filter(|l| !spread.contains(l)).collect();
    }

    // A spread never exceeds MAX_TABLEAU_SIZE, so the pool is never empty here.
    let leaf = pool[rng.random_range(0..pool.len())];
    if lottery {
        history.insert(leaf);
    }
    leaf
}

/// Uniform angle and uniform radius within the bowl annulus.
fn drop_point<R: Rng>(layout: &BowlLayout, rng: &mut R) -> Point {
    let (lo, hi) = layout.drop_range();
    let phi = rng.random_range(0.0..TAU);
    let r = rng.random_range(lo..=hi);
    Point::new(
        layout.center.x + r * phi.cos(),
        layout.center.y + r * phi.sin(),
    )
}

/// Cast a new tableau.
///
/// `history` is only read and written under [`DrawPolicy::Lottery`].
///
/// # Panics
///
/// Panics if `layout` has an empty or non-finite drop range. Layouts are
/// checked once at startup with [`BowlLayout::validate`], which rejects
/// such layouts.
pub fn generate_tableau<R: Rng>(
    policy: DrawPolicy,
    history: &mut DrawHistory,
    layout: &BowlLayout,
    rng: &mut R,
) -> Tableau {
    let count = roll_tableau_size(policy, rng);
    let mut spread = BTreeSet::new();
    let mut cards = Vec::with_capacity(count);

    for slot in 0..count {
        let leaf = draw_leaf(policy, &spread, history, rng);
        spread.insert(leaf);

        let center = drop_point(layout, rng);
        let angle = f64::from(rng.random_range(0u16..360));
        let card = Card::place(slot as u32 + 1, leaf, center, angle, layout);
        tracing::debug!(
            id = card.id,
            leaf = leaf.get(),
            x = center.x,
            y = center.y,
            angle,
            mask = card.mask(),
            "card placed"
        );
        cards.push(card);
    }

    tracing::debug!(%policy, count, history = history.len(), "tableau cast");
    Tableau { cards }
}
