// Сквозные сценарии движка: маски правил, поиск по оболочкам,
// подсчёт очков готового поля.

use realmtiles::blob::blob;
use realmtiles::board::{Adjacency, Board, Coord, TileType};
use realmtiles::distance::{closest_of_types, furthest_of_types};
use realmtiles::rules::{PlacementRule, legality_mask};
use realmtiles::scoring::{score, total_score};

fn cardinality(rule: Option<PlacementRule>) -> usize {
    legality_mask(rule).iter().flatten().filter(|&&b| b).count()
}

#[test]
fn all_28_rules_have_exact_cardinality_and_geometry() {
    for rule in PlacementRule::ALL_RULES {
        let mask = legality_mask(Some(rule));
        match rule.name() {
            "all" => assert_eq!(cardinality(Some(rule)), 81),
            name if name.starts_with("row") => {
                assert_eq!(cardinality(Some(rule)), 9);
                let row: usize = name[3..].parse::<usize>().unwrap() - 1;
                assert!(mask[row].iter().all(|&b| b));
            }
            name if name.starts_with("col") => {
                assert_eq!(cardinality(Some(rule)), 9);
                let col: usize = name[3..].parse::<usize>().unwrap() - 1;
                assert!(mask.iter().all(|cells| cells[col]));
            }
            _ => assert_eq!(cardinality(Some(rule)), 9),
        }
    }
    // отсутствующее правило — разрешительный запасной вариант
    assert_eq!(cardinality(None), 81);
}

#[test]
fn distance_searches_agree_on_unique_target() {
    let mut board = Board::new();
    board.set(Coord::new(1, 7), TileType::Castle);
    let from = Coord::new(6, 3);
    let d = closest_of_types(&board, from, &[TileType::Castle]);
    assert_eq!(d, furthest_of_types(&board, from, &[TileType::Castle]));
    assert_eq!(d, 9);
}

#[test]
fn blob_discovery_is_order_independent() {
    let mut board = Board::new();
    let cross = [
        Coord::new(4, 4),
        Coord::new(3, 4),
        Coord::new(5, 4),
        Coord::new(4, 3),
        Coord::new(4, 5),
    ];
    for &coord in &cross {
        board.set(coord, TileType::Tree);
    }
    let reference = blob(&board, cross[0], Adjacency::Orthogonal);
    assert_eq!(reference.len(), 5);
    for &start in &cross[1..] {
        assert_eq!(blob(&board, start, Adjacency::Orthogonal), reference);
    }
}

#[test]
fn dragon_and_mountain_end_to_end() {
    // пустое поле, дракон в центре, гора слева от него
    let mut board = Board::new();
    board.set(Coord::new(4, 4), TileType::Dragon);
    board.set(Coord::new(4, 3), TileType::Mountain);

    // дракон: +2 за гору-соседа, жилья нет — расстояние 0
    assert_eq!(score(&board, TileType::Dragon), 2);
    // дракон для горы «хорошим» соседом не является
    assert_eq!(score(&board, TileType::Mountain), 0);
    assert_eq!(total_score(&board), 2);
}

#[test]
fn mixed_settlement_scores_add_up() {
    let mut board = Board::new();
    // деревня: таверна с двумя домами, волшебник поодаль
    board.set(Coord::new(1, 1), TileType::Tavern);
    board.set(Coord::new(1, 2), TileType::House);
    board.set(Coord::new(2, 1), TileType::House);
    board.set(Coord::new(7, 7), TileType::Wizard);

    // таверна: оба дома только её — 2 × 2
    assert_eq!(score(&board, TileType::Tavern), 4);
    // дома: у каждого — таверна и дом → по 2
    assert_eq!(score(&board, TileType::House), 4);
    // волшебник: до ближайшего дома (2,1) расстояние 11 → 22
    assert_eq!(score(&board, TileType::Wizard), 22);
    assert_eq!(total_score(&board), 30);
}

#[test]
fn river_and_tree_scenarios() {
    let mut board = Board::new();
    // река из трёх клеток по диагонали: 3·3 − 3 = 6
    board.set(Coord::new(0, 0), TileType::River);
    board.set(Coord::new(1, 1), TileType::River);
    board.set(Coord::new(2, 2), TileType::River);
    // отдельная одиночная река: 0
    board.set(Coord::new(8, 0), TileType::River);
    // роща из трёх клеток: 2·3 − 2 = 4
    board.set(Coord::new(6, 6), TileType::Tree);
    board.set(Coord::new(6, 7), TileType::Tree);
    board.set(Coord::new(7, 6), TileType::Tree);

    assert_eq!(score(&board, TileType::River), 6);
    assert_eq!(score(&board, TileType::Tree), 4);
}

#[test]
fn scoring_is_deterministic_and_read_only() {
    let mut board = Board::new();
    board.set(Coord::new(3, 3), TileType::Castle);
    board.set(Coord::new(5, 5), TileType::Wall);
    board.set(Coord::new(2, 6), TileType::Treasure);

    let snapshot = board.clone();
    let first = total_score(&board);
    let second = total_score(&board);
    assert_eq!(first, second);
    assert_eq!(board, snapshot);
}
