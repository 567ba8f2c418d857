//! Type-safe wrappers and policy enums for hockey stats data.

pub mod ids;
pub mod policy;
pub mod time;

pub use ids::{Nickname, TournamentId};
pub use policy::{CancelledPolicy, DayAttributionMode};
pub use time::{Month, Year};
