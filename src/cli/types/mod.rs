//! Typed CLI values shared across commands.

pub mod filters;
pub mod team;
pub mod year;

pub use filters::TeamSelection;
pub use team::Team;
pub use year::Year;
