// src/config.rs
//! Конфигурация движка
//!
//! Параметры, не относящиеся к правилам игры: генератор случайных полей
//! для демонстрации и настройки растрового вывода. Всё сериализуется
//! в TOML для настройки через конфигурационные файлы.

use serde::{Deserialize, Serialize};
use std::fs;

/// Настройки генератора случайных полей
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Сид генератора случайных чисел (детерминированная генерация)
    #[serde(default)]
    pub seed: u64,

    /// Доля заполненных клеток поля (0.0 = пустое, 1.0 = полное)
    #[serde(default = "default_density")]
    pub density: f32,
}

fn default_density() -> f32 {
    0.5
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            density: 0.5,
        }
    }
}

/// Настройки растрового вывода поля
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Сторона клетки в пикселях
    #[serde(default = "default_cell_px")]
    pub cell_px: u32,

    /// Рисовать ли линии сетки поверх клеток
    #[serde(default = "default_draw_grid")]
    pub draw_grid: bool,
}

fn default_cell_px() -> u32 {
    32
}
fn default_draw_grid() -> bool {
    true
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            cell_px: 32,
            draw_grid: true,
        }
    }
}

/// Полная конфигурация CLI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameConfig {
    /// Генератор демонстрационных полей
    #[serde(default)]
    pub generator: GeneratorSettings,

    /// Растровый вывод
    #[serde(default)]
    pub render: RenderSettings,
}

impl GameConfig {
    /// Загружает конфигурацию из TOML-файла
    ///
    /// # Пример
    /// ```toml
    /// # game.toml
    /// [generator]
    /// seed = 42
    /// density = 0.6
    ///
    /// [render]
    /// cell_px = 48
    /// ```
    pub fn from_toml_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
