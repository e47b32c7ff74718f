#![forbid(unsafe_code)]

pub mod info;
pub mod say_hello;
