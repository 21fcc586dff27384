pub mod environment;
pub mod format;
pub mod logging;
pub mod timestamps;

pub use environment::get_config_dir;
pub use format::format_value;
pub use logging::init_logging;
pub use timestamps::format_recorded_at;
