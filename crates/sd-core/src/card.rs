//! Leaves dropped into the bowl.

use serde::{Deserialize, Serialize};

use crate::bowl::BowlLayout;
use crate::error::{CoreError, CoreResult};
use crate::geometry::{Point, point_in_polygon, rotated_corners, tip_point};
use crate::interpret::{Interpretation, interpret};

/// Number of distinct leaves in the deck.
pub const TOTAL_LEAVES: u32 = 42;

/// Width of every leaf card.
pub const CARD_WIDTH: f64 = 40.0;

/// Height of every leaf card. Also the reach of the tip point.
pub const CARD_HEIGHT: f64 = 30.0;

/// Identity of a leaf's artwork and meaning, in `1..=42`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LeafId(u32);

impl LeafId {
    /// Validate a raw leaf number.
    pub fn new(id: u32) -> CoreResult<Self> {
        if (1..=TOTAL_LEAVES).contains(&id) {
            Ok(Self(id))
        } else {
            Err(CoreError::LeafOutOfRange(id))
        }
    }

    /// Every leaf in deck order.
    pub fn all() -> impl Iterator<Item = LeafId> {
        (1..=TOTAL_LEAVES).map(LeafId)
    }

    /// The raw leaf number.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Title shown when no caption text is available.
    pub fn fallback_title(self) -> String {
        format!("Leaf {}", self.0)
    }
}

impl TryFrom<u32> for LeafId {
    type Error = CoreError;

    fn try_from(value: u32) -> CoreResult<Self> {
        Self::new(value)
    }
}

impl From<LeafId> for u32 {
    fn from(id: LeafId) -> u32 {
        id.0
    }
}

impl std::fmt::Display for LeafId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A placed leaf with its reading.
///
/// Footprint and tip are derived from `center` and `angle` on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Sequence number within the tableau, starting at 1.
    pub id: u32,
    /// Which leaf this is.
    pub leaf: LeafId,
    /// Center of the card.
    pub center: Point,
    /// Rotation in degrees.
    pub angle: f64,
    /// Card width, [`CARD_WIDTH`] for drawn cards.
    pub width: f64,
    /// Card height, [`CARD_HEIGHT`] for drawn cards.
    pub height: f64,
    /// What the card covers and points toward.
    pub interpretation: Interpretation,
}

impl Card {
    /// Place a card and read it against `layout`.
    pub fn place(id: u32, leaf: LeafId, center: Point, angle: f64, layout: &BowlLayout) -> Self {
        let mut card = Self {
            id,
            leaf,
            center,
            angle,
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
            interpretation: Interpretation::default(),
        };
        card.interpretation = interpret(&card, layout);
        card
    }

    /// The rotated rectangle the card covers.
    pub fn footprint(&self) -> [Point; 4] {
        rotated_corners(self.center, self.width, self.height, self.angle)
    }

    /// The point the leaf's tip is aimed at.
    pub fn tip(&self) -> Point {
        tip_point(self.center, self.height, self.angle)
    }

    /// Hit-test a point against the footprint.
    pub fn contains_point(&self, p: Point) -> bool {
        point_in_polygon(p, &self.footprint())
    }

    /// Bit mask of the interpretation.
    pub fn mask(&self) -> u8 {
        self.interpretation.mask()
    }

    /// Space-joined interpretation phrases.
    pub fn message(&self) -> String {
        self.interpretation.message()
    }
}
