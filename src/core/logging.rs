//! Logging abstraction
//!
//! Unified logging macros across targets:
//! - Firmware (`pico_w` feature): defmt over RTT
//! - Host tests: println!/eprintln!
//! - Host non-test: no-op (arguments are still type-checked)
//!
//! Format strings must stay within the subset both defmt and `core::fmt`
//! accept: positional `{}` and `{:?}` only.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico_w")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "pico_w"), test))]
        println!("[INFO] {}", format!($($arg)*));

        #[cfg(all(not(feature = "pico_w"), not(test)))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico_w")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "pico_w"), test))]
        println!("[WARN] {}", format!($($arg)*));

        #[cfg(all(not(feature = "pico_w"), not(test)))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico_w")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "pico_w"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));

        #[cfg(all(not(feature = "pico_w"), not(test)))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico_w")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "pico_w"), test))]
        println!("[DEBUG] {}", format!($($arg)*));

        #[cfg(all(not(feature = "pico_w"), not(test)))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico_w")]
        ::defmt::trace!($($arg)*);

        #[cfg(all(not(feature = "pico_w"), test))]
        println!("[TRACE] {}", format!($($arg)*));

        #[cfg(all(not(feature = "pico_w"), not(test)))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macros_accept_plain_and_formatted_messages() {
        log_info!("plain message");
        log_warn!("value = {}", 42);
        log_error!("debug form: {:?}", Some(1u8));
        log_debug!("float = {} C", 21.5f32);
        log_trace!("trace");
    }
}
