//! Geometry and interpretation engine for spider divination.
//!
//! Leaves are dropped into a bowl holding a stick, a stone, and a hole.
//! Each leaf is read by what its rotated footprint covers and where its tip
//! points. Casting a tableau draws distinct leaves, optionally without
//! repetition across casts (lottery mode).

pub mod bowl;
pub mod card;
pub mod error;
pub mod geometry;
pub mod interpret;
pub mod tableau;

pub use bowl::{BowlLayout, Landmark};
pub use card::{CARD_HEIGHT, CARD_WIDTH, Card, LeafId, TOTAL_LEAVES};
pub use error::{CoreError, CoreResult};
pub use geometry::{Circle, Point, Segment};
pub use interpret::{Interpretation, Sign, interpret};
pub use tableau::{DrawHistory, DrawPolicy, Tableau, generate_tableau};
