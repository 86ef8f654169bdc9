pub mod blob;
pub mod board;
pub mod config;
pub mod distance;
pub mod generator;
pub mod render;
pub mod rules;
pub mod scoring;
pub mod wall;

pub use board::{Adjacency, Board, Coord, TileType};
pub use config::GameConfig;
pub use rules::{LegalityMask, PlacementRule, legality_mask};
pub use scoring::{score, score_breakdown, total_score};
