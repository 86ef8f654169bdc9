// src/blob.rs
//! Поиск «клякс» — связных групп клеток одного типа

use std::collections::BTreeSet;

use crate::board::{Adjacency, Board, Coord, neighbors};

/// Находит кляксу: максимальное связное множество клеток того же типа,
/// что и стартовая, при заданной модели соседства. Итеративный обход
/// со стеком; результат всегда содержит стартовую клетку.
#[must_use]
pub fn blob(board: &Board, start: Coord, adjacency: Adjacency) -> BTreeSet<Coord> {
    let seed_type = board.get(start);
    let mut found = BTreeSet::new();
    found.insert(start);

    let mut worklist = neighbors(start, adjacency);
    while let Some(coord) = worklist.pop() {
        if found.contains(&coord) {
            continue;
        }
        if board.get(coord) == seed_type {
            found.insert(coord);
            worklist.extend(neighbors(coord, adjacency));
        }
    }
    found
}

/// Разбивает набор координат одного типа на непересекающиеся кляксы.
/// Координата, уже попавшая в найденную кляксу, новую не порождает —
/// так ни одна клетка не считается дважды.
#[must_use]
pub fn partition_blobs(
    board: &Board,
    coords: &[Coord],
    adjacency: Adjacency,
) -> Vec<BTreeSet<Coord>> {
    let mut blobs: Vec<BTreeSet<Coord>> = Vec::new();
    for &coord in coords {
        if blobs.iter().any(|b| b.contains(&coord)) {
            continue;
        }
        blobs.push(blob(board, coord, adjacency));
    }
    blobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TileType;

    #[test]
    fn isolated_tile_is_its_own_blob() {
        let mut board = Board::new();
        board.set(Coord::new(3, 3), TileType::Tree);
        let found = blob(&board, Coord::new(3, 3), Adjacency::Orthogonal);
        assert_eq!(found.len(), 1);
        assert!(found.contains(&Coord::new(3, 3)));
    }

    #[test]
    fn flood_fill_is_start_independent() {
        let mut board = Board::new();
        let chain = [Coord::new(2, 2), Coord::new(2, 3), Coord::new(3, 3)];
        for &coord in &chain {
            board.set(coord, TileType::Tree);
        }
        let expected: BTreeSet<Coord> = chain.iter().copied().collect();
        for &start in &chain {
            assert_eq!(blob(&board, start, Adjacency::Orthogonal), expected);
        }
    }

    #[test]
    fn diagonal_touch_does_not_join_orthogonal_blobs() {
        let mut board = Board::new();
        board.set(Coord::new(1, 1), TileType::Tree);
        board.set(Coord::new(2, 2), TileType::Tree);
        let found = blob(&board, Coord::new(1, 1), Adjacency::Orthogonal);
        assert_eq!(found.len(), 1);
        // а реки соединяются именно по диагонали
        board.set(Coord::new(1, 1), TileType::River);
        board.set(Coord::new(2, 2), TileType::River);
        let found = blob(&board, Coord::new(1, 1), Adjacency::DiagonalOnly);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn partition_does_not_double_count() {
        let mut board = Board::new();
        for coord in [
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(5, 5),
            Coord::new(6, 5),
            Coord::new(8, 8),
        ] {
            board.set(coord, TileType::Tree);
        }
        let matching = board.matching_coords(TileType::Tree);
        let blobs = partition_blobs(&board, &matching, Adjacency::Orthogonal);
        let mut sizes: Vec<usize> = blobs.iter().map(BTreeSet::len).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 2, 2]);
        assert_eq!(blobs.iter().map(BTreeSet::len).sum::<usize>(), matching.len());
    }
}
