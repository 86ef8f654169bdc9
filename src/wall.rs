// src/wall.rs
//! Упорядочивание стен «по кругу» и обводка границы
//!
//! Стены кладутся вразброс, но для подсчёта очков их нужно выстроить
//! в обход замкнутого контура. Вместо полярных координат используется
//! фиксированная таблица: каждой клетке присвоен ранг 1–81 — её позиция
//! по часовой стрелке вокруг центра (4,4), ранг 1 — север. Константа,
//! а не вычисление с плавающей запятой: порядок побитово одинаков везде.
//!
//! Известное ограничение: сортировка точна только когда контур близок
//! к центру поля и топологически является простым кольцом. Это осознанное
//! приближение, а не ошибка.

use std::collections::BTreeSet;

use imageproc::drawing::BresenhamLineIter;

use crate::board::{Coord, SIZE};

/// Угловой ранг каждой клетки вокруг центра (4,4): 1 — север,
/// далее по часовой стрелке; на одном луче дальняя клетка идёт раньше
const CLOCKWISE_RANK: [[u8; SIZE]; SIZE] = [
    [72, 76, 78, 81, 1, 6, 8, 11, 12],
    [71, 73, 77, 80, 2, 7, 10, 13, 16],
    [68, 70, 74, 79, 3, 9, 14, 17, 18],
    [66, 67, 69, 75, 4, 15, 19, 20, 21],
    [62, 63, 64, 65, 5, 25, 24, 23, 22],
    [61, 60, 59, 55, 45, 35, 29, 27, 26],
    [58, 57, 54, 49, 44, 39, 34, 30, 28],
    [56, 53, 50, 47, 43, 40, 37, 33, 31],
    [52, 51, 48, 46, 42, 41, 38, 36, 32],
];

/// Медиана списка значений: сортировка числом, для чётной длины —
/// пол от среднего двух средних элементов
fn median(values: &[usize]) -> usize {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2
    }
}

/// Ранг клетки после переноса медианы набора в центр поля.
/// Клетки, выпадающие за границу после сдвига, прижимаются к краю —
/// приближение, не точная полярная геометрия.
fn rank_around(coord: Coord, median_row: usize, median_col: usize) -> u8 {
    let row = (coord.row as i32 - median_row as i32 + 4).clamp(0, SIZE as i32 - 1) as usize;
    let col = (coord.col as i32 - median_col as i32 + 4).clamp(0, SIZE as i32 - 1) as usize;
    CLOCKWISE_RANK[row][col]
}

/// Выстраивает набор стен в приближённый обход контура по часовой
/// стрелке: центрирование на покоординатной медиане, затем сортировка
/// по угловому рангу.
#[must_use]
pub fn order_clockwise(walls: &[Coord]) -> Vec<Coord> {
    if walls.is_empty() {
        return Vec::new();
    }
    let rows: Vec<usize> = walls.iter().map(|c| c.row).collect();
    let cols: Vec<usize> = walls.iter().map(|c| c.col).collect();
    let median_row = median(&rows);
    let median_col = median(&cols);

    let mut ordered = walls.to_vec();
    ordered.sort_by_key(|&coord| rank_around(coord, median_row, median_col));
    ordered
}

/// Клетки «обводки» границы: все клетки на отрезках Брезенхэма между
/// соседними стенами в круговом порядке, включая замыкающий отрезок
/// от последней стены к первой.
#[must_use]
pub fn boundary_stroke(ordered: &[Coord]) -> BTreeSet<Coord> {
    let mut stroke: BTreeSet<Coord> = ordered.iter().copied().collect();
    if ordered.len() < 2 {
        return stroke;
    }
    for i in 0..ordered.len() {
        let from = ordered[i];
        let to = ordered[(i + 1) % ordered.len()];
        let segment = BresenhamLineIter::new(
            (from.col as f32, from.row as f32),
            (to.col as f32, to.row as f32),
        );
        for (x, y) in segment {
            if (0..SIZE as i32).contains(&x) && (0..SIZE as i32).contains(&y) {
                stroke.insert(Coord::new(y as usize, x as usize));
            }
        }
    }
    stroke
}
