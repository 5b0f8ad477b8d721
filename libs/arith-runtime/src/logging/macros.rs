/// `log_debug!(log, "fmt", args..)` logs through a [`Logger`](crate::Logger)
/// at debug level.
#[macro_export]
macro_rules! log_debug {
    ($log:expr, $($arg:tt)+) => {
        $log.debug(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_info {
    ($log:expr, $($arg:tt)+) => {
        $log.info(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($log:expr, $($arg:tt)+) => {
        $log.warning(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_error {
    ($log:expr, $($arg:tt)+) => {
        $log.error(::std::format_args!($($arg)+))
    };
}
