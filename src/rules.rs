// src/rules.rs
//! Правила размещения и маски допустимых клеток
//!
//! Правило каждого хода ограничивает клетки, куда можно поставить плитку:
//! одна строка, один столбец, один сектор 3×3 или всё поле. Маска — чистая
//! функция правила и не зависит от состояния поля.

use serde::{Deserialize, Serialize};

use crate::board::SIZE;

/// Маска допустимости: true ровно в клетках, разрешённых правилом
pub type LegalityMask = [[bool; SIZE]; SIZE];

/// Правило размещения: 28 значений
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementRule {
    #[serde(rename = "row1")]
    Row1,
    #[serde(rename = "row2")]
    Row2,
    #[serde(rename = "row3")]
    Row3,
    #[serde(rename = "row4")]
    Row4,
    #[serde(rename = "row5")]
    Row5,
    #[serde(rename = "row6")]
    Row6,
    #[serde(rename = "row7")]
    Row7,
    #[serde(rename = "row8")]
    Row8,
    #[serde(rename = "row9")]
    Row9,
    #[serde(rename = "col1")]
    Col1,
    #[serde(rename = "col2")]
    Col2,
    #[serde(rename = "col3")]
    Col3,
    #[serde(rename = "col4")]
    Col4,
    #[serde(rename = "col5")]
    Col5,
    #[serde(rename = "col6")]
    Col6,
    #[serde(rename = "col7")]
    Col7,
    #[serde(rename = "col8")]
    Col8,
    #[serde(rename = "col9")]
    Col9,
    NW,
    N,
    NE,
    W,
    C,
    E,
    SW,
    S,
    SE,
    #[serde(rename = "all")]
    All,
}

/// Геометрия, которую выбирает правило
enum Selector {
    Row(usize),
    Col(usize),
    /// Блок 3×3: (индекс блока по строкам, индекс блока по столбцам)
    Sector(usize, usize),
    All,
}

impl PlacementRule {
    /// Все 28 правил в каноническом порядке
    pub const ALL_RULES: [PlacementRule; 28] = [
        PlacementRule::Row1,
        PlacementRule::Row2,
        PlacementRule::Row3,
        PlacementRule::Row4,
        PlacementRule::Row5,
        PlacementRule::Row6,
        PlacementRule::Row7,
        PlacementRule::Row8,
        PlacementRule::Row9,
        PlacementRule::Col1,
        PlacementRule::Col2,
        PlacementRule::Col3,
        PlacementRule::Col4,
        PlacementRule::Col5,
        PlacementRule::Col6,
        PlacementRule::Col7,
        PlacementRule::Col8,
        PlacementRule::Col9,
        PlacementRule::NW,
        PlacementRule::N,
        PlacementRule::NE,
        PlacementRule::W,
        PlacementRule::C,
        PlacementRule::E,
        PlacementRule::SW,
        PlacementRule::S,
        PlacementRule::SE,
        PlacementRule::All,
    ];

    /// Текстовое имя правила (совпадает с serde-представлением)
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PlacementRule::Row1 => "row1",
            PlacementRule::Row2 => "row2",
            PlacementRule::Row3 => "row3",
            PlacementRule::Row4 => "row4",
            PlacementRule::Row5 => "row5",
            PlacementRule::Row6 => "row6",
            PlacementRule::Row7 => "row7",
            PlacementRule::Row8 => "row8",
            PlacementRule::Row9 => "row9",
            PlacementRule::Col1 => "col1",
            PlacementRule::Col2 => "col2",
            PlacementRule::Col3 => "col3",
            PlacementRule::Col4 => "col4",
            PlacementRule::Col5 => "col5",
            PlacementRule::Col6 => "col6",
            PlacementRule::Col7 => "col7",
            PlacementRule::Col8 => "col8",
            PlacementRule::Col9 => "col9",
            PlacementRule::NW => "NW",
            PlacementRule::N => "N",
            PlacementRule::NE => "NE",
            PlacementRule::W => "W",
            PlacementRule::C => "C",
            PlacementRule::E => "E",
            PlacementRule::SW => "SW",
            PlacementRule::S => "S",
            PlacementRule::SE => "SE",
            PlacementRule::All => "all",
        }
    }

    /// Находит правило по имени. Нераспознанное имя — `None`,
    /// что в `legality_mask` означает «всё поле допустимо».
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL_RULES.iter().copied().find(|r| r.name() == name)
    }

    fn selector(self) -> Selector {
        match self {
            PlacementRule::Row1 => Selector::Row(0),
            PlacementRule::Row2 => Selector::Row(1),
            PlacementRule::Row3 => Selector::Row(2),
            PlacementRule::Row4 => Selector::Row(3),
            PlacementRule::Row5 => Selector::Row(4),
            PlacementRule::Row6 => Selector::Row(5),
            PlacementRule::Row7 => Selector::Row(6),
            PlacementRule::Row8 => Selector::Row(7),
            PlacementRule::Row9 => Selector::Row(8),
            PlacementRule::Col1 => Selector::Col(0),
            PlacementRule::Col2 => Selector::Col(1),
            PlacementRule::Col3 => Selector::Col(2),
            PlacementRule::Col4 => Selector::Col(3),
            PlacementRule::Col5 => Selector::Col(4),
            PlacementRule::Col6 => Selector::Col(5),
            PlacementRule::Col7 => Selector::Col(6),
            PlacementRule::Col8 => Selector::Col(7),
            PlacementRule::Col9 => Selector::Col(8),
            PlacementRule::NW => Selector::Sector(0, 0),
            PlacementRule::N => Selector::Sector(0, 1),
            PlacementRule::NE => Selector::Sector(0, 2),
            PlacementRule::W => Selector::Sector(1, 0),
            PlacementRule::C => Selector::Sector(1, 1),
            PlacementRule::E => Selector::Sector(1, 2),
            PlacementRule::SW => Selector::Sector(2, 0),
            PlacementRule::S => Selector::Sector(2, 1),
            PlacementRule::SE => Selector::Sector(2, 2),
            PlacementRule::All => Selector::All,
        }
    }
}

/// Строит маску допустимых клеток для правила.
/// `None` (правило не задано) трактуется разрешительно:
/// допустимо всё поле.
#[must_use]
pub fn legality_mask(rule: Option<PlacementRule>) -> LegalityMask {
    let Some(rule) = rule else {
        return [[true; SIZE]; SIZE];
    };

    let mut mask = [[false; SIZE]; SIZE];
    match rule.selector() {
        Selector::Row(row) => mask[row] = [true; SIZE],
        Selector::Col(col) => {
            for row in 0..SIZE {
                mask[row][col] = true;
            }
        }
        Selector::Sector(block_row, block_col) => {
            for row in block_row * 3..block_row * 3 + 3 {
                for col in block_col * 3..block_col * 3 + 3 {
                    mask[row][col] = true;
                }
            }
        }
        Selector::All => mask = [[true; SIZE]; SIZE],
    }
    mask
}
