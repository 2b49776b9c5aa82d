//! Generic utility primitives with zero domain knowledge.

pub mod template;
