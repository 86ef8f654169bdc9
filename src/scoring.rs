// src/scoring.rs
//! Подсчёт очков готового поля: десять независимых правил, по одному
//! на тип клетки. Все функции чистые — только чтение снимка поля.

use std::collections::BTreeSet;

use crate::blob::partition_blobs;
use crate::board::{Adjacency, Board, CENTER, Coord, TileType, neighbors};
use crate::distance::closest_of_types;
use crate::wall::{boundary_stroke, order_clockwise};

/// Очки за один тип клеток
#[must_use]
pub fn score(board: &Board, tile: TileType) -> i32 {
    let matching = board.matching_coords(tile);
    match tile {
        TileType::Empty => 0,
        TileType::Wizard => wizard_score(board, &matching),
        TileType::Dragon => dragon_score(board, &matching),
        TileType::Castle => castle_score(board, &matching),
        TileType::Tavern => tavern_score(board, &matching),
        TileType::Mountain => mountain_score(board, &matching),
        TileType::River => river_score(board, &matching),
        TileType::Wall => wall_score(board, &matching),
        TileType::House => house_score(board, &matching),
        TileType::Tree => tree_score(board, &matching),
        TileType::Treasure => treasure_score(&matching),
    }
}

/// Итоговые очки: сумма по всем десяти типам
#[must_use]
pub fn total_score(board: &Board) -> i32 {
    TileType::SCORABLE.iter().map(|&t| score(board, t)).sum()
}

/// Постатейная разбивка очков (для вывода игроку)
#[must_use]
pub fn score_breakdown(board: &Board) -> Vec<(TileType, i32)> {
    TileType::SCORABLE
        .iter()
        .map(|&t| (t, score(board, t)))
        .collect()
}

/// Драконы: +2 за каждого соседа-гору или сокровище, плюс расстояние
/// до ближайшего жилья (дом, таверна, замок, волшебник)
fn dragon_score(board: &Board, matching: &[Coord]) -> i32 {
    const GOOD: [TileType; 2] = [TileType::Mountain, TileType::Treasure];
    const BAD: [TileType; 4] = [
        TileType::House,
        TileType::Tavern,
        TileType::Castle,
        TileType::Wizard,
    ];
    matching
        .iter()
        .map(|&coord| {
            let near_good = neighbors(coord, Adjacency::Full)
                .into_iter()
                .filter(|&n| GOOD.contains(&board.get(n)))
                .count() as i32;
            2 * near_good + closest_of_types(board, coord, &BAD) as i32
        })
        .sum()
}

/// Горы: +2 за каждого соседа-дерево или реку
fn mountain_score(board: &Board, matching: &[Coord]) -> i32 {
    const GOOD: [TileType; 2] = [TileType::Tree, TileType::River];
    matching
        .iter()
        .map(|&coord| {
            2 * neighbors(coord, Adjacency::Full)
                .into_iter()
                .filter(|&n| GOOD.contains(&board.get(n)))
                .count() as i32
        })
        .sum()
}

/// Реки соединяются только по диагонали; каждая клякса даёт 3·размер − 3.
/// Метрика «длиннейшего русла» не реализована; размер кляксы —
/// документированное приближение.
fn river_score(board: &Board, matching: &[Coord]) -> i32 {
    partition_blobs(board, matching, Adjacency::DiagonalOnly)
        .iter()
        .map(|blob| 3 * blob.len() as i32 - 3)
        .sum()
}

/// Деревья: ортогональные кляксы, каждая даёт 2·размер − 2
fn tree_score(board: &Board, matching: &[Coord]) -> i32 {
    partition_blobs(board, matching, Adjacency::Orthogonal)
        .iter()
        .map(|blob| 2 * blob.len() as i32 - 2)
        .sum()
}

/// Замки: расстояние до ближайшего дома, таверны или стены
fn castle_score(board: &Board, matching: &[Coord]) -> i32 {
    const TARGETS: [TileType; 3] = [TileType::House, TileType::Tavern, TileType::Wall];
    matching
        .iter()
        .map(|&coord| closest_of_types(board, coord, &TARGETS) as i32)
        .sum()
}

/// Стены: контур восстанавливается обводкой упорядоченных стен;
/// −2 за каждый дом или таверну на обводке, +10 один раз, если на ней
/// стоит замок. Проверяется только принадлежность обводке; теста
/// «внутри многоугольника» нет — документированное приближение.
fn wall_score(board: &Board, matching: &[Coord]) -> i32 {
    let stroke = boundary_stroke(&order_clockwise(matching));
    let mut total = 0;
    for &coord in &stroke {
        if matches!(board.get(coord), TileType::House | TileType::Tavern) {
            total -= 2;
        }
    }
    if stroke.iter().any(|&c| board.get(c) == TileType::Castle) {
        total += 10;
    }
    total
}

/// Дома: число различных непустых типов среди соседей; повторы типа
/// не считаются, пустые клетки не считаются никогда
fn house_score(board: &Board, matching: &[Coord]) -> i32 {
    matching
        .iter()
        .map(|&coord| {
            let mut seen = BTreeSet::from([TileType::Empty]);
            neighbors(coord, Adjacency::Full)
                .into_iter()
                .filter(|&n| seen.insert(board.get(n)))
                .count() as i32
        })
        .sum()
}

/// Таверны: множества соседних домов сворачиваются симметрической
/// разностью — дом, попавший к двум тавернам, выпадает из обеих.
/// Очки: 2 × размер итогового множества.
fn tavern_score(board: &Board, matching: &[Coord]) -> i32 {
    let house_sets = matching.iter().map(|&coord| {
        neighbors(coord, Adjacency::Full)
            .into_iter()
            .filter(|&n| board.get(n) == TileType::House)
            .collect::<BTreeSet<Coord>>()
    });
    let unshared = house_sets
        .reduce(|acc, cur| acc.symmetric_difference(&cur).copied().collect())
        .unwrap_or_default();
    2 * unshared.len() as i32
}

/// Сокровища: половина расстояния до центра поля, округлённая вверх
fn treasure_score(matching: &[Coord]) -> i32 {
    matching
        .iter()
        .map(|&coord| coord.manhattan(CENTER).div_ceil(2) as i32)
        .sum()
}

/// Волшебники: 2 × расстояние до ближайшего дома или таверны
fn wizard_score(board: &Board, matching: &[Coord]) -> i32 {
    const TARGETS: [TileType; 2] = [TileType::House, TileType::Tavern];
    matching
        .iter()
        .map(|&coord| 2 * closest_of_types(board, coord, &TARGETS) as i32)
        .sum()
}
