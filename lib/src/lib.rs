#![deny(bare_trait_objects)]

#[macro_use]
pub(crate) mod util;
pub mod ai;
pub mod game;
pub mod primitives;
pub mod rules;
