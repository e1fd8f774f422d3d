//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: deck name, progress, status message
//! - `CardFace`: front or back of one card
//!
//! ### Stateful Components
//!
//! Persistent `*State` lives in `TuiState`; the component wrapper is built
//! each frame around a borrow of it and records hit-test rectangles there.
//!
//! - `CardStack`: top card plus filler outlines, follows the drag offset
//! - `CompletionScreen`: end-of-deck message and restart button
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── title_bar.rs
//! ├── card_face.rs
//! ├── card_stack.rs
//! └── completion.rs
//! ```

pub mod card_face;
pub mod card_stack;
pub mod completion;
mod title_bar;

pub use card_stack::{CardStack, CardStackState};
pub use completion::{CompletionScreen, CompletionState};
pub use title_bar::TitleBar;
