use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::player::Player;
use crate::domain::PlayerId;

/// Простая генерация ID игроков на основе монотонного счётчика.
/// Потокобезопасна: можно делить между потоками через `&`.
#[derive(Debug)]
pub struct IdGenerator {
    player_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор, первый выданный id = 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Генератор с заданным первым id (например, после загрузки состава).
    pub fn starting_at(first: PlayerId) -> Self {
        Self {
            player_counter: AtomicU64::new(first),
        }
    }

    #[inline]
    pub fn next_player_id(&self) -> PlayerId {
        self.player_counter.fetch_add(1, Ordering::Relaxed)
    }

    /// Новый игрок с пустой рукой и свежим id.
    pub fn new_player(&self, name: impl Into<String>) -> Player {
        Player::new(self.next_player_id(), name)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
