//! # Runner Game
//!
//! Obstacle runner built on `runner_engine`: a ball sits on a scrolling track
//! while groups of cube obstacles sweep, converge, cross or bob in front of
//! it. The first collision ends the run.
//!
//! ## Organization
//!
//! - [`components`] - scene objects and the player sphere
//! - [`obstacle`] - obstacle patterns and per-group collision checks
//! - [`track`] - groups in flight, scrolling and recycling
//! - [`state`] - `Playing -> GameOver` state machine and score
//! - [`game`] - fixed-step frame driver
//! - [`config`] - TOML/RON game configuration

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod components;
pub mod config;
pub mod game;
pub mod obstacle;
pub mod state;
pub mod track;
