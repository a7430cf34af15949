//! Движок домино "42".
//!
//! Пока здесь только фундамент будущего движка взяток:
//! - `domain`: костяшка, набор "дубль-шесть", игроки и партнёрства;
//! - `infra`: генерация ID.
//!
//! Библиотека пишет диагностику через `tracing` и не ставит subscriber сама.

pub mod domain;
pub mod infra;

pub use domain::{DominoSet, Player, PlayerId, RenderConfig, Roster, RosterError, Tile, TileError};
pub use infra::IdGenerator;
