// src/generator.rs
//! Детерминированная генерация случайных полей
//!
//! Демонстрационный «раздающий»: заполняет долю клеток случайными
//! типами с частотами, пропорциональными составу колоды раздачи
//! (54 карты: волшебник — 1, дракон и замок — по 2, остальные — по 7).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::{Board, SIZE, TileType};

/// Частоты типов в пуле раздачи
const TILE_POOL: [(TileType, usize); 10] = [
    (TileType::Wizard, 1),
    (TileType::Dragon, 2),
    (TileType::Castle, 2),
    (TileType::Tavern, 7),
    (TileType::Mountain, 7),
    (TileType::River, 7),
    (TileType::Wall, 7),
    (TileType::House, 7),
    (TileType::Tree, 7),
    (TileType::Treasure, 7),
];

/// Генерирует случайное поле: `density` — доля заполненных клеток (0..=1).
/// Один и тот же сид всегда даёт одно и то же поле.
#[must_use]
pub fn generate_board(seed: u64, density: f32) -> Board {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let pool: Vec<TileType> = TILE_POOL
        .iter()
        .flat_map(|&(tile, weight)| std::iter::repeat(tile).take(weight))
        .collect();

    let mut board = Board::new();
    let target = ((SIZE * SIZE) as f32 * density.clamp(0.0, 1.0)).round() as usize;
    let mut placed = 0;
    while placed < target {
        let row = rng.gen_range(0..SIZE);
        let col = rng.gen_range(0..SIZE);
        if board.tiles[row][col] != TileType::Empty {
            continue;
        }
        board.tiles[row][col] = pool[rng.gen_range(0..pool.len())];
        placed += 1;
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_board() {
        assert_eq!(generate_board(42, 0.5), generate_board(42, 0.5));
        assert_ne!(generate_board(42, 0.5), generate_board(43, 0.5));
    }

    #[test]
    fn density_controls_fill_count() {
        let filled = |board: &Board| {
            board
                .tiles
                .iter()
                .flatten()
                .filter(|&&t| t != TileType::Empty)
                .count()
        };
        assert_eq!(filled(&generate_board(7, 0.0)), 0);
        assert_eq!(filled(&generate_board(7, 0.5)), 41);
        assert_eq!(filled(&generate_board(7, 1.0)), 81);
    }

    #[test]
    fn pool_matches_the_54_card_deck() {
        let total: usize = TILE_POOL.iter().map(|&(_, w)| w).sum();
        assert_eq!(total, 54);
    }
}
