//! Small standalone helpers behind the `max` and `repeat` subcommands.

pub mod numbers;
pub mod repeat;
