//! File Tree Widget
//!
//! Interactive tree over the files detected in a digest. Directory rows show
//! a tri-state checkbox derived from the files below them; toggling a
//! directory selects or clears its whole subtree.
//!
//! # Module Structure
//!
//! - `menu` - TreeMenu state and action handling
//! - `render` - line rendering (interactive rows and the static listing)
//! - `input` - key mapping and the raw-mode loop

mod input;
mod menu;
mod render;

pub use input::run_interactive;
pub use menu::{TreeMenu, TreeOutcome};
pub use render::render_static_tree;
