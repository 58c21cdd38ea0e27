pub mod eval;
pub mod minimax;
pub mod opening;
