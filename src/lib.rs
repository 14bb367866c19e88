pub mod audio;
pub mod config;
pub mod controls;
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod render;
pub mod settings;
pub mod theme;
pub mod ui;
