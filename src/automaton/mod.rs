//! The automaton layer: the labelled-transition model (`core`), the base
//! constructors for each atomic predicate (`base`), the lazy composition
//! views that implement the logical connectives (`compose`), and the error
//! taxonomy raised while building or using automata (`error`).

pub(crate) mod base;
pub(crate) mod compose;
pub mod core;
pub mod error;

pub use core::{Arc, ArcIndex, Dfa, State, Sym};
