pub mod word;

pub use word::{NewWord, Tag, Word};
