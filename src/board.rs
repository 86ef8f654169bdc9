// src/board.rs
//! Модель игрового поля 9×9
//!
//! Единственный геометрический примитив движка — перечисление соседей
//! клетки при заданной модели соседства. Вся многоклеточная геометрия
//! (кляксы, оболочки расстояний, обводка стен) строится поверх него.
//! Выход за границы поля обрезается, без заворота.

use serde::{Deserialize, Serialize};
use std::fs;

/// Размер игрового поля по каждой оси
pub const SIZE: usize = 9;

/// Максимальное манхэттенское расстояние между клетками поля
/// (два противоположных угла)
pub const MAX_DISTANCE: u32 = 16;

/// Координата клетки: (строка, столбец), каждая в [0,8]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// Центральная клетка поля
pub const CENTER: Coord = Coord { row: 4, col: 4 };

impl Coord {
    /// Создаёт координату. Выход за пределы поля — нарушение контракта.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < SIZE && col < SIZE, "координата вне поля: ({row}, {col})");
        Self { row, col }
    }

    /// Манхэттенское расстояние до другой клетки
    #[must_use]
    pub fn manhattan(self, other: Coord) -> u32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u32
    }
}

/// Тип клетки поля
///
/// `Empty` — единственный тип без правила подсчёта очков.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TileType {
    #[default]
    Empty,
    Wizard,
    Dragon,
    Castle,
    Tavern,
    Mountain,
    River,
    Wall,
    House,
    Tree,
    Treasure,
}

impl TileType {
    /// Все типы клеток в каноническом порядке
    pub const ALL: [TileType; 11] = [
        TileType::Empty,
        TileType::Wizard,
        TileType::Dragon,
        TileType::Castle,
        TileType::Tavern,
        TileType::Mountain,
        TileType::River,
        TileType::Wall,
        TileType::House,
        TileType::Tree,
        TileType::Treasure,
    ];

    /// Типы, участвующие в подсчёте очков (все, кроме `Empty`)
    pub const SCORABLE: [TileType; 10] = [
        TileType::Wizard,
        TileType::Dragon,
        TileType::Castle,
        TileType::Tavern,
        TileType::Mountain,
        TileType::River,
        TileType::Wall,
        TileType::House,
        TileType::Tree,
        TileType::Treasure,
    ];

    /// Имя типа в нижнем регистре (совпадает с serde-представлением)
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TileType::Empty => "empty",
            TileType::Wizard => "wizard",
            TileType::Dragon => "dragon",
            TileType::Castle => "castle",
            TileType::Tavern => "tavern",
            TileType::Mountain => "mountain",
            TileType::River => "river",
            TileType::Wall => "wall",
            TileType::House => "house",
            TileType::Tree => "tree",
            TileType::Treasure => "treasure",
        }
    }

    /// Пиктограмма для текстового вывода поля
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            TileType::Empty => "·",
            TileType::Wizard => "🧙",
            TileType::Dragon => "🐲",
            TileType::Castle => "🏰",
            TileType::Tavern => "🌆",
            TileType::Mountain => "🗻",
            TileType::River => "💦",
            TileType::Wall => "🧱",
            TileType::House => "🏠",
            TileType::Tree => "🌲",
            TileType::Treasure => "💰",
        }
    }

    /// Описание предпочтений типа (подсказка игроку)
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            TileType::Empty => "",
            TileType::Wizard => "Волшебники держатся подальше от домов и таверн",
            TileType::Dragon => "Драконы любят горы и золото, но злятся на людей",
            TileType::Castle => "Замки любят золото и держатся подальше от драконов",
            TileType::Tavern => "Таверны любят соседство домов, но не любят делиться",
            TileType::Mountain => "Горы любят соседство других гор и деревьев",
            TileType::River => "Реки любят длинные непересекающиеся линии",
            TileType::Wall => "Стены любят окружать замки, но не дома",
            TileType::House => "Дома любят соседство непохожих клеток",
            TileType::Tree => "Деревья любят большие сплошные рощи",
            TileType::Treasure => "Сокровища любят быть подальше от центра карты",
        }
    }

    /// Цвет клетки для растрового вывода
    #[must_use]
    pub fn to_rgb(self) -> [u8; 3] {
        match self {
            TileType::Empty => [240, 236, 224],
            TileType::Wizard => [140, 90, 200],
            TileType::Dragon => [170, 40, 40],
            TileType::Castle => [130, 130, 140],
            TileType::Tavern => [200, 140, 60],
            TileType::Mountain => [110, 100, 90],
            TileType::River => [70, 130, 200],
            TileType::Wall => [160, 80, 70],
            TileType::House => [220, 180, 120],
            TileType::Tree => [60, 130, 60],
            TileType::Treasure => [230, 200, 70],
        }
    }
}

/// Модель соседства клеток
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Adjacency {
    /// Только ортогональные соседи (до 4)
    Orthogonal,
    /// Ортогональные и диагональные соседи (до 8)
    #[default]
    Full,
    /// Только диагональные соседи (до 4); так соединяются реки
    DiagonalOnly,
}

const ORTHOGONAL_DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

const DIAGONAL_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const FULL_DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Adjacency {
    fn directions(self) -> &'static [(i32, i32)] {
        match self {
            Adjacency::Orthogonal => &ORTHOGONAL_DIRECTIONS,
            Adjacency::Full => &FULL_DIRECTIONS,
            Adjacency::DiagonalOnly => &DIAGONAL_DIRECTIONS,
        }
    }
}

/// Перечисляет соседей клетки в пределах поля.
/// На краях и в углах соседи за границей просто отбрасываются.
#[must_use]
pub fn neighbors(coord: Coord, adjacency: Adjacency) -> Vec<Coord> {
    let mut resp = Vec::with_capacity(8);
    for &(dr, dc) in adjacency.directions() {
        let nr = coord.row as i32 + dr;
        let nc = coord.col as i32 + dc;
        if nr >= 0 && nr < SIZE as i32 && nc >= 0 && nc < SIZE as i32 {
            resp.push(Coord::new(nr as usize, nc as usize));
        }
    }
    resp
}

/// Все клетки поля на точном манхэттенском расстоянии `distance` от центра.
/// Полный проход по 81 клетке; при `distance == 1` совпадает с
/// ортогональными соседями.
#[must_use]
pub fn manhattan_shell(center: Coord, distance: u32) -> Vec<Coord> {
    let mut found = Vec::new();
    for coord in coords() {
        if center.manhattan(coord) == distance {
            found.push(coord);
        }
    }
    found
}

/// Все координаты поля в построчном порядке
pub fn coords() -> impl Iterator<Item = Coord> {
    (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Coord { row, col }))
}

/// Игровое поле: матрица 9×9 типов клеток, построчно.
/// Движок только читает поле; мутации — забота вызывающей стороны.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Board {
    pub tiles: [[TileType; SIZE]; SIZE],
}

impl Board {
    /// Пустое поле
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: [[TileType::Empty; SIZE]; SIZE],
        }
    }

    #[must_use]
    pub fn get(&self, coord: Coord) -> TileType {
        self.tiles[coord.row][coord.col]
    }

    pub fn set(&mut self, coord: Coord, tile: TileType) {
        self.tiles[coord.row][coord.col] = tile;
    }

    /// Координаты всех клеток данного типа, в построчном порядке
    #[must_use]
    pub fn matching_coords(&self, tile: TileType) -> Vec<Coord> {
        coords().filter(|&c| self.get(c) == tile).collect()
    }

    /// Загружает поле из JSON-файла
    pub fn from_json_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let board: Self = serde_json::from_str(&contents)?;
        Ok(board)
    }

    /// Сохраняет поле в JSON-файл
    pub fn save_as_json(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
