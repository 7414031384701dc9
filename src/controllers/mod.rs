pub mod chaos_game;
pub mod cli;
pub mod ports;
