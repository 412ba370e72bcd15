/// Codepoint sequences and the special codepoints inside of them
pub mod sequence;
