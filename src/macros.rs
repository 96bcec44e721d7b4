//! Call-site logging macros.
//!
//! Each macro captures the calling file (`file!()`) and function name, formats
//! its arguments like `format!`, and hands the record to the process-wide
//! manager. Nothing is written until the manager has a threshold and has been
//! started.
//!
//! # Examples
//!
//! ```
//! use log_pipeline::{info, warn, trace3};
//!
//! info!("Server started");
//!
//! let port = 8080;
//! info!("Server listening on port {}", port);
//!
//! warn!("Retry attempt {} of {}", 3, 5);
//! trace3!("buffer state: {:?}", [1, 2, 3]);
//! ```

/// Name of the enclosing function, without its module path.
///
/// Closures report the function they are defined in.
///
/// ```
/// use log_pipeline::function_name;
///
/// fn handle_request() -> &'static str {
///     function_name!()
/// }
///
/// assert_eq!(handle_request(), "handle_request");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let path = __type_name_of(__here);
        let path = path.strip_suffix("::__here").unwrap_or(path);
        let path = path.trim_end_matches("::{{closure}}");
        match path.rfind("::") {
            Some(pos) => &path[pos + 2..],
            None => path,
        }
    }};
}

/// Log a message at an explicit level.
///
/// ```
/// use log_pipeline::{log, Severity};
/// log!(Severity::Info, "Simple message");
/// log!(Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::get_manager().log(
            $level,
            ::std::file!(),
            $crate::function_name!(),
            ::std::format!($($arg)+),
        )
    };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Fatal, $($arg)+)
    };
}

/// Same as [`fatal!`].
#[macro_export]
macro_rules! severe {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Fatal, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace1 {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Trace1, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace2 {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Trace2, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace3 {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Trace3, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace4 {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Trace4, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace5 {
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Trace5, $($arg)+)
    };
}

/// Log through a [`Loggable`](crate::Loggable), using its name in place of the
/// source file.
///
/// ```
/// use log_pipeline::{loggable, Loggable, Severity};
///
/// struct Cache;
///
/// impl Loggable for Cache {
///     fn logger_name(&self) -> &str {
///         "Cache"
///     }
/// }
///
/// impl Cache {
///     fn evict(&self, key: &str) {
///         loggable!(self, Severity::Debug, "evicting {}", key);
///     }
/// }
///
/// Cache.evict("session:42");
/// ```
#[macro_export]
macro_rules! loggable {
    ($owner:expr, $level:expr, $($arg:tt)+) => {
        $crate::Loggable::log_as(
            &$owner,
            $level,
            $crate::function_name!(),
            ::std::format!($($arg)+),
        )
    };
}
