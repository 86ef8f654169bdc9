// src/distance.rs
//! Поиск ближайшей и дальней клетки нужного типа по оболочкам
//! манхэттенского расстояния

use crate::board::{Board, Coord, MAX_DISTANCE, TileType, manhattan_shell};

/// Наименьшее расстояние d ≥ 1, на котором встречается клетка одного из
/// `types`. Оболочки просматриваются по возрастанию, первый найденный
/// радиус и есть минимум. Возвращает 0, если подходящих клеток нет.
#[must_use]
pub fn closest_of_types(board: &Board, from: Coord, types: &[TileType]) -> u32 {
    for distance in 1..=MAX_DISTANCE {
        let hit = manhattan_shell(from, distance)
            .into_iter()
            .any(|c| types.contains(&board.get(c)));
        if hit {
            return distance;
        }
    }
    0
}

/// Наибольшее расстояние с клеткой одного из `types`: тот же проход по
/// оболочкам, но без раннего выхода — запоминается последнее совпадение.
/// Возвращает 0, если подходящих клеток нет.
#[must_use]
pub fn furthest_of_types(board: &Board, from: Coord, types: &[TileType]) -> u32 {
    let mut max = 0;
    for distance in 1..=MAX_DISTANCE {
        let hit = manhattan_shell(from, distance)
            .into_iter()
            .any(|c| types.contains(&board.get(c)));
        if hit {
            max = distance;
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_searches_agree_on_a_single_target() {
        let mut board = Board::new();
        board.set(Coord::new(2, 6), TileType::House);
        let from = Coord::new(4, 4);
        let expected = from.manhattan(Coord::new(2, 6));
        assert_eq!(closest_of_types(&board, from, &[TileType::House]), expected);
        assert_eq!(furthest_of_types(&board, from, &[TileType::House]), expected);
    }

    #[test]
    fn closest_picks_minimum_furthest_picks_maximum() {
        let mut board = Board::new();
        board.set(Coord::new(4, 6), TileType::Tavern);
        board.set(Coord::new(0, 0), TileType::House);
        let from = Coord::new(4, 4);
        let targets = [TileType::House, TileType::Tavern];
        assert_eq!(closest_of_types(&board, from, &targets), 2);
        assert_eq!(furthest_of_types(&board, from, &targets), 8);
    }

    #[test]
    fn absent_type_yields_zero() {
        let board = Board::new();
        let from = Coord::new(0, 0);
        assert_eq!(closest_of_types(&board, from, &[TileType::Castle]), 0);
        assert_eq!(furthest_of_types(&board, from, &[TileType::Castle]), 0);
    }

    #[test]
    fn corner_to_corner_is_reachable() {
        let mut board = Board::new();
        board.set(Coord::new(8, 8), TileType::Wizard);
        assert_eq!(
            closest_of_types(&board, Coord::new(0, 0), &[TileType::Wizard]),
            MAX_DISTANCE
        );
    }
}
