pub mod config;
pub mod render_to_file;
