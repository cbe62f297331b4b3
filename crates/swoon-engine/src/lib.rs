//! Play engine for Swoon.
//!
//! Two independent controllers: [`Session`] walks a script's cast through
//! its dialogues and accumulates affinity from the player's choices, and
//! [`Carousel`] cycles a fixed set of display panels with wraparound.
//! Both render through capability traits ([`Stage`], [`Deck`]) so the
//! concrete display binding lives in the front-end adapters.

pub mod error;
pub mod gallery;
pub mod session;
pub mod stage;

pub use error::{EngineError, EngineResult};
pub use gallery::{Carousel, Deck};
pub use session::{Phase, Session, Step};
pub use stage::Stage;
