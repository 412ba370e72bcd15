/// Tables that map Discord emoji names to emoji sequences and back
pub mod emoji_tables;
pub mod errors;
/// The serialized form of an emoji table
pub mod prototype;
pub(crate) mod utils;
