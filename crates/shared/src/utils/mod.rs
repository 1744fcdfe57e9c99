mod format_timestamp;
mod logs;
mod shutdown;

pub use self::format_timestamp::format_timestamp;
pub use self::logs::init_logger;
pub use self::shutdown::shutdown_signal;
