//! Доменная модель "42": костяшки, набор, игроки и партнёрства.

pub mod errors;
pub mod player;
pub mod render;
pub mod roster;
pub mod set;
pub mod tile;

pub type PlayerId = u64;

// Реэкспорты, чтобы в других модулях писать crate::domain::Tile и т.п.
pub use errors::*;
pub use player::*;
pub use render::*;
pub use roster::*;
pub use set::*;
pub use tile::*;
