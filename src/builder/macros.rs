//! Macros for composing error values.

/// Build an [`ErrorValue`](crate::ErrorValue) from one or more fragments.
///
/// Each fragment is appended in order using its `Display` form, exactly as
/// chained [`ErrorStream::push`](crate::builder::ErrorStream::push) calls
/// would.
///
/// # Example
///
/// ```
/// use outcome::{err, Outcome};
///
/// let code = 404;
/// let result: Outcome<String> = err!("not found ", code).into();
/// assert_eq!(result.unwrap_error(), "not found 404");
/// ```
#[macro_export]
macro_rules! err {
    ($($fragment:expr),+ $(,)?) => {{
        let stream = $crate::builder::ErrorStream::new();
        $(let stream = stream.push($fragment);)+
        $crate::core::ErrorValue::from(stream)
    }};
}
