mod controls;
mod movement;

pub use controls::Controls;
pub use movement::{MoveParams, apply, is_free};
