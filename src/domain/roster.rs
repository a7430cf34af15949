use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::errors::RosterError;
use crate::domain::player::Player;
use crate::domain::PlayerId;

/// Состав игроков. Единственный владелец `Player`; партнёрство
/// резолвится поиском по `PlayerId`.
///
/// Десериализация проверяет, что ключ совпадает с `Player.id`
/// и что каждая ссылка на партнёра взаимна.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RosterRepr")]
pub struct Roster {
    players: HashMap<PlayerId, Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Добавить игрока. Повторный id даёт ошибку, существующий игрок не трогается.
    pub fn add(&mut self, player: Player) -> Result<(), RosterError> {
        if self.players.contains_key(&player.id) {
            return Err(RosterError::DuplicatePlayer {
                player_id: player.id,
            });
        }
        self.players.insert(player.id, player);
        Ok(())
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(&id)
    }

    /// Игроки в порядке возрастания id.
    pub fn players(&self) -> Vec<&Player> {
        let mut res: Vec<&Player> = self.players.values().collect();
        res.sort_by_key(|p| p.id);
        res
    }

    /// Связать двух игроков партнёрством (с обеих сторон).
    ///
    /// Прежние партнёры обоих игроков теряют обратную ссылку.
    pub fn link_partners(&mut self, a: PlayerId, b: PlayerId) -> Result<(), RosterError> {
        if a == b {
            return Err(RosterError::SelfPartner { player_id: a });
        }
        self.ensure_present(a)?;
        self.ensure_present(b)?;

        self.unlink(a)?;
        self.unlink(b)?;

        if let Some(p) = self.players.get_mut(&a) {
            p.partner = Some(b);
        }
        if let Some(p) = self.players.get_mut(&b) {
            p.partner = Some(a);
        }

        debug!(a, b, "linked partners");
        Ok(())
    }

    /// Разорвать партнёрство игрока. Возвращает бывшего партнёра, если был.
    pub fn unlink(&mut self, id: PlayerId) -> Result<Option<PlayerId>, RosterError> {
        let player = self
            .players
            .get_mut(&id)
            .ok_or(RosterError::PlayerNotFound { player_id: id })?;

        let Some(partner_id) = player.partner.take() else {
            return Ok(None);
        };

        if let Some(partner) = self.players.get_mut(&partner_id) {
            if partner.partner == Some(id) {
                partner.partner = None;
            }
        }

        debug!(id, partner_id, "unlinked partners");
        Ok(Some(partner_id))
    }

    /// Партнёр игрока, если он задан и присутствует в составе.
    pub fn partner_of(&self, id: PlayerId) -> Option<&Player> {
        self.players
            .get(&id)
            .and_then(|p| p.partner)
            .and_then(|pid| self.players.get(&pid))
    }

    /// Проверка инвариантов состава, собранного снаружи.
    fn validate(&self) -> Result<(), RosterError> {
        for (&key, player) in &self.players {
            if key != player.id {
                return Err(RosterError::IdMismatch {
                    key,
                    player_id: player.id,
                });
            }
            let Some(partner_id) = player.partner else {
                continue;
            };
            if partner_id == player.id {
                return Err(RosterError::SelfPartner { player_id: key });
            }
            let partner = self.players.get(&partner_id).ok_or(RosterError::PlayerNotFound {
                player_id: partner_id,
            })?;
            if partner.partner != Some(key) {
                return Err(RosterError::OneWayPartner {
                    player_id: key,
                    partner_id,
                });
            }
        }
        Ok(())
    }

    fn ensure_present(&self, id: PlayerId) -> Result<(), RosterError> {
        if self.players.contains_key(&id) {
            Ok(())
        } else {
            Err(RosterError::PlayerNotFound { player_id: id })
        }
    }
}

/// Сырой состав из JSON, до проверки инвариантов.
#[derive(Deserialize)]
struct RosterRepr {
    players: HashMap<PlayerId, Player>,
}

impl TryFrom<RosterRepr> for Roster {
    type Error = RosterError;

    fn try_from(repr: RosterRepr) -> Result<Self, Self::Error> {
        let roster = Roster {
            players: repr.players,
        };
        roster.validate()?;
        Ok(roster)
    }
}
