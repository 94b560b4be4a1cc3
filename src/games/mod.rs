//! # Game Implementations Module
//!
//! Each game implements the crate level `DrawNumber` trait so the controller
//! can drive it without knowing how targets are drawn.

pub mod draw_number;
