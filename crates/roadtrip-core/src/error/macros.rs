//! Error macros for roadtrip

/// Macro for rejecting a malformed data line
#[macro_export]
macro_rules! bail_malformed {
    ($source:expr, $line:expr, $($reason:tt)+) => {
        return Err($crate::error::RoadTripError::malformed(
            $source,
            $line,
            format!($($reason)+),
        ))
    };
}
