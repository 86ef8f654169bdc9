use clap::Parser;
use realmtiles::{Board, GameConfig, PlacementRule, legality_mask};
use std::path::PathBuf;

/// Движок подсчёта очков для плиточной головоломки Realm Tiles
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к конфигурационному файлу в формате TOML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Путь к полю в формате JSON; без него поле генерируется по сиду
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Сид генератора (перекрывает значение из конфигурации)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Имя правила размещения — печатает маску допустимых клеток
    #[arg(short, long)]
    rule: Option<String>,

    /// Путь для сохранения PNG-изображения поля
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_toml_file(path.to_str().unwrap())?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.generator.seed = seed;
    }

    let board = match &cli.board {
        Some(path) => {
            println!("🔍 Загрузка поля из {path:?}...");
            Board::from_json_file(path.to_str().unwrap())?
        }
        None => {
            println!(
                "Генерация поля (сид: {}, плотность: {})...",
                config.generator.seed, config.generator.density
            );
            realmtiles::generator::generate_board(config.generator.seed, config.generator.density)
        }
    };

    println!();
    for row in &board.tiles {
        let line: Vec<&str> = row.iter().map(|t| t.glyph()).collect();
        println!("  {}", line.join(" "));
    }

    if let Some(rule_name) = &cli.rule {
        let rule = PlacementRule::from_name(rule_name);
        if rule.is_none() {
            println!("\nПравило «{rule_name}» не распознано — допустимо всё поле");
        } else {
            println!("\nМаска правила «{rule_name}»:");
        }
        for mask_row in legality_mask(rule) {
            let line: Vec<&str> = mask_row.iter().map(|&b| if b { "■" } else { "·" }).collect();
            println!("  {}", line.join(" "));
        }
    }

    println!("\nОчки по типам:");
    for (tile, points) in realmtiles::score_breakdown(&board) {
        println!("  {:<10} {points:>4}  {}", tile.name(), tile.description());
    }
    println!("Итого: {}", realmtiles::total_score(&board));

    if let Some(output) = &cli.output {
        realmtiles::render::save_as_png(&board, &config.render, output.to_str().unwrap())?;
        println!("\nГотово! Изображение сохранено в {output:?}");
    }
    Ok(())
}
