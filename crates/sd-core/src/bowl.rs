//! The bowl and its three fixed landmarks.
//!
//! Cards fall somewhere inside the bowl annulus and are read against the
//! stick, the stone, and the hole.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::geometry::{Circle, Point, Segment, distance, point_near_segment};

/// Closest distance from the bowl center at which a card may land.
pub const MIN_DROP_RADIUS: f64 = 20.0;

/// Gap kept between a card center and the bowl rim.
pub const RIM_MARGIN: f64 = 30.0;

/// Hover reach around the stick.
const STICK_HOVER_REACH: f64 = 15.0;

/// Hover reach added to the stone and hole radii.
const DISC_HOVER_SLACK: f64 = 10.0;

/// One of the three fixed bowl features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Landmark {
    /// The stick segment.
    Stick,
    /// The stone disc.
    Stone,
    /// The hole disc.
    Hole,
}

impl std::fmt::Display for Landmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stick => write!(f, "stick"),
            Self::Stone => write!(f, "stone"),
            Self::Hole => write!(f, "hole"),
        }
    }
}

/// Geometry of the bowl and its landmarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BowlLayout {
    /// Center of the playing area.
    pub center: Point,
    /// Radius of the playing area.
    pub radius: f64,
    /// The stick lying across the bowl floor.
    pub stick: Segment,
    /// The stone disc.
    pub stone: Circle,
    /// The hole disc.
    pub hole: Circle,
}

impl Default for BowlLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl BowlLayout {
    /// The layout of the painted bowl.
    pub const fn standard() -> Self {
        Self {
            center: Point::new(340.0, 195.0),
            radius: 95.0,
            stick: Segment::new(Point::new(400.0, 260.0), Point::new(420.0, 220.0)),
            stone: Circle::new(Point::new(263.0, 137.0), 12.0),
            hole: Circle::new(Point::new(370.0, 155.0), 15.0),
        }
    }

    /// Parse and validate a layout from JSON.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Read, parse, and validate a layout file.
    pub fn from_json_file(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Smallest and largest card-center distance from the bowl center.
    pub fn drop_range(&self) -> (f64, f64) {
        (MIN_DROP_RADIUS, self.radius - RIM_MARGIN)
    }

    /// Reject layouts a tableau cannot be dropped into.
    pub fn validate(&self) -> CoreResult<()> {
        let finite = [
            self.center.x,
            self.center.y,
            self.radius,
            self.stick.a.x,
            self.stick.a.y,
            self.stick.b.x,
            self.stick.b.y,
            self.stone.center.x,
            self.stone.center.y,
            self.stone.radius,
            self.hole.center.x,
            self.hole.center.y,
            self.hole.radius,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(CoreError::InvalidLayout(
                "coordinates must be finite".to_string(),
            ));
        }
        if self.stone.radius <= 0.0 || self.hole.radius <= 0.0 {
            return Err(CoreError::InvalidLayout(
                "stone and hole radii must be positive".to_string(),
            ));
        }
        let (lo, hi) = self.drop_range();
        if hi <= lo {
            return Err(CoreError::InvalidLayout(format!(
                "bowl radius {} leaves no room to drop cards (needs more than {})",
                self.radius,
                MIN_DROP_RADIUS + RIM_MARGIN
            )));
        }
        Ok(())
    }

    /// The landmark a pointer at `p` is hovering over, if any.
    ///
    /// The stick wins over the stone, and the stone over the hole.
    pub fn landmark_near(&self, p: Point) -> Option<Landmark> {
        if point_near_segment(p, self.stick, STICK_HOVER_REACH) {
            Some(Landmark::Stick)
        } else if distance(p, self.stone.center) < self.stone.radius + DISC_HOVER_SLACK {
            Some(Landmark::Stone)
        } else if distance(p, self.hole.center) < self.hole.radius + DISC_HOVER_SLACK {
            Some(Landmark::Hole)
        } else {
            None
        }
    }
}
