// src/macros.rs

/// Owned `String` from anything `String: From` accepts; `s!()` is empty.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($value:expr) => {
        ::std::string::String::from($value)
    };
}

/// Concatenate string slices into a new `String`: `join!(dir, "/", name)`.
#[macro_export]
macro_rules! join {
    ($head:expr $(, $tail:expr)* $(,)?) => {{
        let mut out = ::std::string::String::from($head);
        $( out.push_str($tail); )*
        out
    }};
}
