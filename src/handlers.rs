#![forbid(unsafe_code)]

pub mod greeting;
pub mod info;
