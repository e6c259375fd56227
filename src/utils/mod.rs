//! Small helpers shared across commands.

pub mod plural;
