//! Order and line item records as managed by the generic store actor.

pub mod entity;
pub mod line_item;
