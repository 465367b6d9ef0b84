//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the utree crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use utree::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let config = EngineConfig::from_file("path/to/config.json")?;
//! let mut engine = TreeEngine::try_load("path/to/tree", config)?;
//!
//! engine.current_node_mut().set_text_input("42");
//! if engine.advance().is_moved() {
//!     println!("Now at: {:?}", engine.current_node_name());
//! }
//! # Ok(())
//! # }
//! ```

// Engine and navigation
pub use crate::engine::{Advance, BlockReason, EngineConfig, NodeState, Retreat, TreeEngine};
pub use crate::history::NavigationHistory;

// Nodes and transitions
pub use crate::node::{BuiltNode, Checklist, Choice, Node, NodeFactory, TextInput};
pub use crate::transition::{TransitionKey, TransitionTable};

// Bundle contents
pub use crate::assets::{AssetResolver, NodeAssets};
pub use crate::document::{BundleLayout, NodeCategory, TreeDocument};
pub use crate::localization::{HintsDictionary, Localizer};
pub use crate::name::{NodeNameInfo, TaskNodeType};

// Error types
pub use crate::error::{ConfigError, DocumentError};

// Standard library re-exports commonly used with this crate
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
