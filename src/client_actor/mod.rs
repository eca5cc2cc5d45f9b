//! Client records as managed by the generic store actor.

pub mod entity;
