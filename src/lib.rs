//! Aviary - evolving flock simulation with a headless frame renderer

pub mod brain;
pub mod core;
pub mod genetics;
pub mod renderer;
pub mod simulation;
