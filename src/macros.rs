// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand.

    // No args: empty String
    () => {
        ::std::string::String::new()
    };
    // One expression: literal, const or var
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenate into one String; first arg sets the allocation
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[macro_export]
macro_rules! svec {
    // Vec<String> from &str items; row literals in tests mostly
    ($($item:expr),* $(,)?) => {
        ::std::vec![$(::std::string::String::from($item)),*]
    };
}
