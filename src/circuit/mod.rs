//! Resistor network tree and the passes that make it canonical.
//!
//! This module provides the tree representation of a circuit after parsing.
//! The [`Circuit`] struct runs the whole pipeline: normalization, validation,
//! solving and labeling.

mod label;
mod network;
mod normalize;
mod types;
mod validate;

pub use label::{assign_labels, label, LabelSequence};
pub use network::Circuit;
pub use normalize::{collapse_single_branches, flatten_nested_parallels, is_canonical, normalize};
pub use types::*;
pub use validate::validate_network;
