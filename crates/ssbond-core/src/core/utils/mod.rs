//! Stateless numeric helpers shared by the engine.

pub mod geometry;
