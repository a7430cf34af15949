use thiserror::Error;

use crate::domain::PlayerId;

/// Ошибки построения костяшки.
///
/// Тексты сообщений фиксированы: клиенты сравнивают их побуквенно,
/// поэтому само значение в сообщение не попадает (оно уходит в лог).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TileError {
    /// Значение стороны не является целым числом.
    #[error("Domino values must be integers")]
    NotInteger,

    /// Целое значение стороны вне диапазона 0..=6.
    #[error("Domino values must be between 0 and 6")]
    OutOfRange,

    /// Вход не похож на костяшку: строка без разделителя "3-4",
    /// массив из трёх и более значений.
    #[error("Malformed domino input: {0:?}")]
    Malformed(String),
}

/// Ошибки работы с составом игроков и партнёрствами.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Player {player_id} not found")]
    PlayerNotFound { player_id: PlayerId },

    #[error("Player {player_id} is already in the roster")]
    DuplicatePlayer { player_id: PlayerId },

    #[error("Player {player_id} cannot partner with themselves")]
    SelfPartner { player_id: PlayerId },

    #[error("Roster key {key} does not match player id {player_id}")]
    IdMismatch { key: PlayerId, player_id: PlayerId },

    #[error("Player {player_id} is linked to {partner_id}, but the link is not mutual")]
    OneWayPartner {
        player_id: PlayerId,
        partner_id: PlayerId,
    },
}
