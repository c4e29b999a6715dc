pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Verifies a constructor argument, reporting the failed condition text.
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

/// Verifies the shape of an external document, with a message built only
/// when the check fails.
#[macro_export]
macro_rules! verify_data {
    ($element:expr, $expr:expr, $($message:tt)+) => {{
        if !$expr {
            $crate::result::invalid_format($element, &format!($($message)+))?;
        }
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::Error::invalid_arg(name, condition))
}

#[cold]
pub fn invalid_format(element: &str, message: &str) -> Result<()> {
    Err(crate::error::Error::invalid_format(element, message))
}
