use serde::{Deserialize, Serialize};

use crate::domain::tile::{Pips, Tile, MAX_PIPS, MIN_PIPS};

/// Полный набор костяшек. В домене это просто упорядоченный список:
/// раздача и перемешивание сюда не входят.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DominoSet {
    pub tiles: Vec<Tile>,
}

impl DominoSet {
    /// Стандартный набор "дубль-шесть", 28 костяшек в порядке
    /// 0-0, 1-0, 1-1, 2-0, ..., 6-6 (старшая половинка первой).
    pub fn double_six() -> Self {
        let mut tiles = Vec::with_capacity(28);
        for high in MIN_PIPS..=MAX_PIPS {
            for low in MIN_PIPS..=high {
                tiles.push(Tile::from_pips(high, low));
            }
        }
        DominoSet { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Есть ли в наборе костяшка с такими половинками (в любом порядке).
    pub fn contains(&self, a: Pips, b: Pips) -> bool {
        self.tiles
            .iter()
            .any(|t| t.pips() == (a, b) || t.pips() == (b, a))
    }

    pub fn doubles(&self) -> Vec<Tile> {
        self.tiles.iter().copied().filter(Tile::is_double).collect()
    }

    /// Счётные костяшки с ненулевой ценой (0-0 формально счётная,
    /// но очков не приносит).
    pub fn count_tiles(&self) -> Vec<Tile> {
        self.tiles
            .iter()
            .copied()
            .filter(|t| t.value() > 0)
            .collect()
    }

    /// Сумма очков всех счётных костяшек. Для полного набора это 35.
    pub fn total_count_value(&self) -> u32 {
        self.tiles.iter().map(|t| u32::from(t.value())).sum()
    }
}

impl<'a> IntoIterator for &'a DominoSet {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
