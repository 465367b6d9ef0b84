//! # utree - Offline Decision-Tree Interpreter
//!
//! **utree** walks authored decision-tree bundles one node at a time. A bundle
//! is a directory holding a process-definition XML document plus optional
//! translation catalogs, hint catalogs, images and audio. Node names in the
//! document encode the node type, display text, media references and answer
//! checks in a compact `~`-separated mini-language.
//!
//! ## Core Workflow
//!
//! 1.  **Load a Bundle**: `TreeEngine::load` reads the bundle and builds the start node.
//!     Missing or malformed parts degrade to defaults and placeholders; loading never fails.
//! 2.  **Present the Node**: read `current_node()`, the resolved media paths and the hints
//!     of the active language.
//! 3.  **Record Interaction**: select options, tick checklist items or type text through
//!     `current_node_mut()`.
//! 4.  **Navigate**: `advance()` follows the transition picked by the interaction state,
//!     `retreat()` returns to the previous node, and `set_language()` re-renders the
//!     current node in another language.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use utree::prelude::*;
//!
//! let mut engine = TreeEngine::load("trees/Sample Tree");
//! println!("{}", engine.title());
//!
//! while !engine.is_current_end_state() {
//!     if let Some(text) = engine.current_node().text() {
//!         println!("{}", text);
//!     }
//!     // Pick the first option of selection nodes.
//!     engine.current_node_mut().select(0);
//!
//!     match engine.advance() {
//!         Advance::Moved => {}
//!         Advance::Blocked(reason) => {
//!             println!("Cannot advance: {:?}", reason);
//!             break;
//!         }
//!     }
//! }
//! ```

pub mod assets;
pub mod document;
pub mod engine;
pub mod error;
pub mod history;
pub mod localization;
pub mod name;
pub mod node;
pub mod prelude;
pub mod transition;
