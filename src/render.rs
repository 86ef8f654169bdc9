// src/render.rs
//! Растровый вывод поля в PNG

use image::{ImageBuffer, Rgba};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::board::{Board, SIZE};
use crate::config::RenderSettings;

/// Рисует поле: закрашенные клетки палитры типов и, при необходимости,
/// линии сетки поверх
#[must_use]
pub fn render_board(board: &Board, settings: &RenderSettings) -> ImageBuffer<Rgba<u8>, Vec<u8>> {
    let cell = settings.cell_px;
    let size_px = cell * SIZE as u32;
    let mut img = ImageBuffer::from_pixel(size_px, size_px, Rgba([255, 255, 255, 255]));

    for (row, cells) in board.tiles.iter().enumerate() {
        for (col, tile) in cells.iter().enumerate() {
            let rgb = tile.to_rgb();
            let rect = Rect::at((col as u32 * cell) as i32, (row as u32 * cell) as i32)
                .of_size(cell, cell);
            draw_filled_rect_mut(&mut img, rect, Rgba([rgb[0], rgb[1], rgb[2], 255]));
            if settings.draw_grid {
                draw_hollow_rect_mut(&mut img, rect, Rgba([40, 40, 40, 255]));
            }
        }
    }
    img
}

/// Сохраняет изображение поля в PNG-файл
pub fn save_as_png(
    board: &Board,
    settings: &RenderSettings,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    render_board(board, settings).save(path)?;
    Ok(())
}
