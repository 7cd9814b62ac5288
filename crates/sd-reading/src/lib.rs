//! Reading sessions for spider divination.
//!
//! A session owns the random source, the draw policy, the lottery draw
//! history, and the current tableau, and answers line-oriented commands
//! such as `cast`, `pick`, and `show`.

pub mod config;
pub mod error;
pub mod session;

pub use config::ReadingConfig;
pub use error::{ReadingError, ReadingResult};
pub use session::ReadingSession;
