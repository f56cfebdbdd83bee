//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`. Each function only
/// needs to implement [`FnOnce`].
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ```
/// use contact_lifecycle::pipe;
///
/// fn trim(raw: &str) -> &str { raw.trim() }
/// fn to_owned(text: &str) -> String { text.to_owned() }
///
/// let cleaned = pipe!("  Richard ", trim, to_owned);
/// assert_eq!(cleaned, "Richard");
/// ```
///
/// Closures work as stages as long as they are wrapped in parentheses:
///
/// ```
/// use contact_lifecycle::pipe;
///
/// let length = pipe!("test@example.com", (|address: &str| address.split('@').count()));
/// assert_eq!(length, 2);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_pipe_value_only() {
        let result = pipe!("Chuo");
        assert_eq!(result, "Chuo");
    }

    #[test]
    fn test_pipe_single() {
        let lift = Some;
        assert_eq!(pipe!("Andrew", lift), Some("Andrew"));
    }

    #[test]
    fn test_pipe_left_to_right() {
        let present = |name: &'static str| Some(name);
        let to_result = |name: Option<&'static str>| name.ok_or("absent");
        let to_length = |name: Result<&'static str, &'static str>| name.map(str::len);

        assert_eq!(pipe!("Richard", present, to_result, to_length), Ok(7));
    }
}
