pub mod progress_logger;
