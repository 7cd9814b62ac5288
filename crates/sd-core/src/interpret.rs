//! Reading a card against the bowl landmarks.
//!
//! Six independent tests decide what a leaf covers and what its tip points
//! toward. Each test owns one bit and one phrase; the message lists the
//! phrases of the set bits from the lowest bit up.

use serde::{Deserialize, Serialize};

use crate::bowl::BowlLayout;
use crate::card::Card;
use crate::geometry::{
    point_near_circle, point_near_segment, polygon_intersects_circle, segment_intersects_polygon,
};

/// How close the tip must come to the stick to point at it.
pub const STICK_POINTING_REACH: f64 = 20.0;

/// Slack added to a disc radius when testing whether the tip points at it.
pub const DISC_POINTING_SLACK: f64 = 15.0;

/// One interpretation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// The footprint crosses or covers the stick.
    OverStick,
    /// The footprint overlaps the stone.
    OverStone,
    /// The footprint overlaps the hole.
    OverHole,
    /// The tip lies close to the stick.
    PointingToStick,
    /// The tip lies in the vicinity of the stone.
    PointingToStone,
    /// The tip lies in the vicinity of the hole.
    PointingToHole,
}

impl Sign {
    /// All signs in bit order.
    pub const ALL: [Sign; 6] = [
        Sign::OverStick,
        Sign::OverStone,
        Sign::OverHole,
        Sign::PointingToStick,
        Sign::PointingToStone,
        Sign::PointingToHole,
    ];

    /// Mask bit for this sign.
    pub fn bit(self) -> u8 {
        match self {
            Self::OverStick => 1,
            Self::OverStone => 2,
            Self::OverHole => 4,
            Self::PointingToStick => 8,
            Self::PointingToStone => 16,
            Self::PointingToHole => 32,
        }
    }

    /// Text appended to the card message when the sign is set.
    pub fn phrase(self) -> &'static str {
        match self {
            Self::OverStick => "is over stick",
            Self::OverStone => "is over stone",
            Self::OverHole => "is over hole",
            Self::PointingToStick => "is pointing to stick",
            Self::PointingToStone => "is pointing to stone",
            Self::PointingToHole => "is pointing to hole",
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Result of reading one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Interpretation {
    /// See [`Sign::OverStick`].
    pub over_stick: bool,
    /// See [`Sign::OverStone`].
    pub over_stone: bool,
    /// See [`Sign::OverHole`].
    pub over_hole: bool,
    /// See [`Sign::PointingToStick`].
    pub pointing_to_stick: bool,
    /// See [`Sign::PointingToStone`].
    pub pointing_to_stone: bool,
    /// See [`Sign::PointingToHole`].
    pub pointing_to_hole: bool,
}

impl Interpretation {
    /// Build from a raw bit mask. Bits above 32 are ignored.
    pub fn from_mask(mask: u8) -> Self {
        let mut out = Self::default();
        for sign in Sign::ALL {
            out.set(sign, mask & sign.bit() != 0);
        }
        out
    }

    /// Whether `sign` is set.
    pub fn has(&self, sign: Sign) -> bool {
        match sign {
            Sign::OverStick => self.over_stick,
            Sign::OverStone => self.over_stone,
            Sign::OverHole => self.over_hole,
            Sign::PointingToStick => self.pointing_to_stick,
            Sign::PointingToStone => self.pointing_to_stone,
            Sign::PointingToHole => self.pointing_to_hole,
        }
    }

    /// Set or clear `sign`.
    pub fn set(&mut self, sign: Sign, on: bool) {
        let slot = match sign {
            Sign::OverStick => &mut self.over_stick,
            Sign::OverStone => &mut self.over_stone,
            Sign::OverHole => &mut self.over_hole,
            Sign::PointingToStick => &mut self.pointing_to_stick,
            Sign::PointingToStone => &mut self.pointing_to_stone,
            Sign::PointingToHole => &mut self.pointing_to_hole,
        };
        *slot = on;
    }

    /// The set signs in bit order.
    pub fn signs(&self) -> impl Iterator<Item = Sign> + '_ {
        Sign::ALL.into_iter().filter(|s| self.has(*s))
    }

    /// Sum of the bits of the set signs.
    pub fn mask(&self) -> u8 {
        self.signs().map(Sign::bit).sum()
    }

    /// True when no sign is set.
    pub fn is_empty(&self) -> bool {
        self.signs().next().is_none()
    }

    /// Phrases of the set signs joined by single spaces.
    pub fn message(&self) -> String {
        self.signs().map(Sign::phrase).collect::<Vec<_>>().join(" ")
    }
}

impl std::fmt::Display for Interpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "No special position")
        } else {
            write!(f, "{}", self.message())
        }
    }
}

/// Read a card against the landmarks of `layout`.
pub fn interpret(card: &Card, layout: &BowlLayout) -> Interpretation {
    let footprint = card.footprint();
    let tip = card.tip();

    Interpretation {
        over_stick: segment_intersects_polygon(layout.stick, &footprint),
        over_stone: polygon_intersects_circle(&footprint, layout.stone),
        over_hole: polygon_intersects_circle(&footprint, layout.hole),
        pointing_to_stick: point_near_segment(tip, layout.stick, STICK_POINTING_REACH),
        pointing_to_stone: point_near_circle(
            tip,
            layout.stone.center,
            layout.stone.radius + DISC_POINTING_SLACK,
        ),
        pointing_to_hole: point_near_circle(
            tip,
            layout.hole.center,
            layout.hole.radius + DISC_POINTING_SLACK,
        ),
    }
}
