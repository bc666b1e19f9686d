pub mod elapsed;
pub mod log_path;
pub mod wedding;
