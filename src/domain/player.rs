use serde::{Deserialize, Serialize};

use crate::domain::tile::Tile;
use crate::domain::PlayerId;

/// Игрок за столом "42": имя, рука и ссылка на партнёра.
///
/// Сам по себе ничего не проверяет. Рука меняется снаружи (раздача, розыгрыш),
/// партнёр хранится как `PlayerId`, а не как второй владеющий указатель:
/// двое партнёров ссылаются друг на друга, и владеть друг другом они не могут.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Костяшки в порядке получения.
    pub hand: Vec<Tile>,
    pub partner: Option<PlayerId>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            partner: None,
        }
    }

    pub fn has_partner(&self) -> bool {
        self.partner.is_some()
    }
}
