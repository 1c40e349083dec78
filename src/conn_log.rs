#[macro_export]
macro_rules! conn_debug {
    ($($arg:tt)*) => {
        if log::log_enabled!(log::Level::Debug) {
            log::debug!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! conn_info {
    ($($arg:tt)*) => {
        if log::log_enabled!(log::Level::Info) {
            log::info!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! conn_warn {
    ($($arg:tt)*) => {
        if log::log_enabled!(log::Level::Warn) {
            log::warn!($($arg)*);
        }
    };
}
