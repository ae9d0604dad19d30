pub mod hello;
pub mod jwt;
pub mod words;
