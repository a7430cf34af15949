use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::domain::errors::TileError;
use crate::domain::render::{render_box, RenderConfig};

/// Минимальное число точек на половинке.
pub const MIN_PIPS: u8 = 0;
/// Максимальное число точек на половинке (набор "дубль-шесть").
pub const MAX_PIPS: u8 = 6;
/// Костяшка "считается" (приносит очки), если сумма делится на это число.
pub const COUNT_DIVISOR: u8 = 5;

/// Масть в "42" это просто число точек 0..=6.
pub type Pips = u8;

/// Костяшка домино. Неизменяема после создания: обе половинки
/// гарантированно лежат в 0..=6, естественная масть считается один раз.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TileRepr", into = "TileFields")]
pub struct Tile {
    side_one: Pips,
    side_two: Pips,
    natural_suit: Pips,
}

impl Tile {
    /// Создать костяшку из двух целых. Проверяется только диапазон:
    /// тип уже гарантирован сигнатурой.
    pub fn new(side_one: i64, side_two: i64) -> Result<Self, TileError> {
        let (Some(one), Some(two)) = (checked_pips(side_one), checked_pips(side_two)) else {
            debug!(side_one, side_two, "rejected domino: side out of range");
            return Err(TileError::OutOfRange);
        };
        Ok(Self::from_pips(one, two))
    }

    /// Создать костяшку из нетипизированных значений (например, из JSON).
    ///
    /// Сначала обе стороны проверяются на целочисленность, и только потом
    /// на диапазон: для `(3.5, 9)` вернётся `NotInteger`, а не `OutOfRange`.
    pub fn from_values(side_one: &Value, side_two: &Value) -> Result<Self, TileError> {
        let (Some(one), Some(two)) = (as_integer(side_one), as_integer(side_two)) else {
            debug!(%side_one, %side_two, "rejected domino: non-integer side");
            return Err(TileError::NotInteger);
        };
        Self::new(one, two)
    }

    /// Внутренний конструктор для уже проверенных значений.
    pub(crate) const fn from_pips(side_one: Pips, side_two: Pips) -> Self {
        let natural_suit = if side_one > side_two { side_one } else { side_two };
        Self {
            side_one,
            side_two,
            natural_suit,
        }
    }

    pub fn side_one(&self) -> Pips {
        self.side_one
    }

    pub fn side_two(&self) -> Pips {
        self.side_two
    }

    /// Старшая половинка (для дубля её значение).
    pub fn natural_suit(&self) -> Pips {
        self.natural_suit
    }

    pub fn pips(&self) -> (Pips, Pips) {
        (self.side_one, self.side_two)
    }

    /// Сумма точек на обеих половинках.
    pub fn total(&self) -> u8 {
        self.side_one + self.side_two
    }

    pub fn is_double(&self) -> bool {
        self.side_one == self.side_two
    }

    /// Эффективная масть костяшки при заданной масти захода.
    ///
    /// Без захода берётся естественная масть. Если одна из половинок совпадает
    /// с мастью захода, костяшка идёт в эту масть, иначе остаётся
    /// в своей естественной.
    pub fn suit(&self, lead_suit: Option<Pips>) -> Pips {
        match lead_suit {
            None => self.natural_suit,
            Some(lead) if self.side_one == lead => self.side_one,
            Some(lead) if self.side_two == lead => self.side_two,
            Some(_) => self.natural_suit,
        }
    }

    /// "Счётная" костяшка: сумма делится на 5 (включая 0-0).
    pub fn is_count(&self) -> bool {
        self.total() % COUNT_DIVISOR == 0
    }

    /// Очки костяшки: сумма, если она делится на 5, иначе 0.
    ///
    /// Для 0-0 тоже 0, так что отличить её от "не счётной" можно только
    /// через [`Tile::is_count`].
    pub fn value(&self) -> u8 {
        if self.is_count() {
            self.total()
        } else {
            0
        }
    }

    /// Отрисовать костяшку рамкой с заданными настройками.
    pub fn render(&self, config: &RenderConfig) -> String {
        render_box(
            &self.side_one.to_string(),
            &self.side_two.to_string(),
            config,
        )
    }
}

fn checked_pips(value: i64) -> Option<Pips> {
    Pips::try_from(value)
        .ok()
        .filter(|pips| (MIN_PIPS..=MAX_PIPS).contains(pips))
}

/// Целое из JSON-значения. Дробные числа, строки, null и т.п. дают `None`.
/// Целые больше `i64::MAX` сводятся к `i64::MAX`: они всё равно вне диапазона.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_u64().map(|_| i64::MAX)),
        _ => None,
    }
}

impl fmt::Debug for Tile {
    /// Формат вида `Domino(3, 4)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Domino({}, {})", self.side_one, self.side_two)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderConfig::default()))
    }
}

/// Парсинг строки вида "3-4" или "3|4".
impl FromStr for Tile {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((left, right)) = s.split_once(|c: char| c == '-' || c == '|') else {
            return Err(TileError::Malformed(s.to_string()));
        };
        let (left, right) = (left.trim(), right.trim());
        if left.is_empty() || right.is_empty() {
            return Err(TileError::Malformed(s.to_string()));
        }

        let is_digits = |side: &str| side.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(left) || !is_digits(right) {
            debug!(input = s, "rejected domino: non-integer side");
            return Err(TileError::NotInteger);
        }

        // Только цифры, так что ошибка парсинга здесь означает переполнение i64.
        match (left.parse::<i64>(), right.parse::<i64>()) {
            (Ok(one), Ok(two)) => Tile::new(one, two),
            _ => {
                debug!(input = s, "rejected domino: side out of range");
                Err(TileError::OutOfRange)
            }
        }
    }
}

/// Что принимаем на входе десериализации: `{"side_one":3,"side_two":4}` или `[3, 4]`.
/// Отсутствующая сторона превращается в `null` и отвергается как не целое.
#[derive(Deserialize)]
#[serde(untagged)]
enum TileRepr {
    Seq(Vec<Value>),
    Fields {
        #[serde(default)]
        side_one: Value,
        #[serde(default)]
        side_two: Value,
    },
}

impl TryFrom<TileRepr> for Tile {
    type Error = TileError;

    fn try_from(repr: TileRepr) -> Result<Self, Self::Error> {
        match repr {
            TileRepr::Seq(values) if values.len() > 2 => Err(TileError::Malformed(
                Value::Array(values).to_string(),
            )),
            TileRepr::Seq(values) => {
                let side = |i: usize| values.get(i).cloned().unwrap_or(Value::Null);
                Tile::from_values(&side(0), &side(1))
            }
            TileRepr::Fields { side_one, side_two } => Tile::from_values(&side_one, &side_two),
        }
    }
}

/// Что отдаём при сериализации.
#[derive(Serialize)]
struct TileFields {
    side_one: Pips,
    side_two: Pips,
}

impl From<Tile> for TileFields {
    fn from(tile: Tile) -> Self {
        Self {
            side_one: tile.side_one,
            side_two: tile.side_two,
        }
    }
}
