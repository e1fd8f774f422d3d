//! # Core Application Logic
//!
//! This module contains Fayin's study logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │                         │
//!                    │  • loader  (asset→Card) │
//!                    │  • deck    (navigator)  │
//!                    │  • highlight (segments) │
//!                    │  • state + action       │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   Audio    │
//!           │  Adapter   │              │   Player   │
//!           │ (ratatui)  │              │ (external) │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`card`]: The `Card` entity
//! - [`loader`]: Reads a deck asset, empty on failure
//! - [`deck`]: Active/dismissed stacks and the swipe rules
//! - [`highlight`]: Splits example text around a marker
//! - [`audio`]: The `AudioPlayer` seam and the process-based player
//! - [`state`]: The `App` struct
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: Layered settings

pub mod action;
pub mod audio;
pub mod card;
pub mod config;
pub mod deck;
pub mod highlight;
pub mod loader;
pub mod state;
