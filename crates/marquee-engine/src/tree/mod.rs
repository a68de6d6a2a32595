//! Retained display tree.
//!
//! The tree is the surface higher layers write text into. It stands in for
//! whatever the host ultimately renders (a terminal, a widget toolkit, a
//! template) and is deliberately tiny: nodes carry text, an optional element
//! id, an optional raw timestamp attribute, and an optional slot role.

mod display_tree;
mod node;

pub use display_tree::{DisplayTree, NodeId};
pub use node::{Node, SlotRole};
