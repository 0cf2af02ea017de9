//! Error macros for sograph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for creating script errors at a given line
#[macro_export]
macro_rules! bail_script {
    ($line:expr, $($arg:tt)*) => {
        return Err($crate::error::GraphError::script($line, format!($($arg)*)))
    };
}
