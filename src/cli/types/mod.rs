//! Type-safe wrappers and enums for basketball stat data.

pub mod category;
pub mod ids;
pub mod season;
pub mod stat;

pub use category::Category;
pub use ids::{PlayerId, TeamCode};
pub use season::SeasonWindow;
pub use stat::{ShotType, StatKind};
