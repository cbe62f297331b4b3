//! Terminal front-end for the Swoon dating-sim engine.
//!
//! One ratatui screen per engine phase: an opening screen with a portrait
//! gallery, the play screen, and the finale screen.

pub mod app;
pub mod screens;
pub mod terminal;
pub mod view;
