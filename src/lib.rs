pub mod catalog;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod hint;
pub mod leaderboard;
pub mod score;
// cmd and reports belong to the binary (main.rs).
