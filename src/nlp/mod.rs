//! Natural language helpers: sentence segmentation and character-offset
//! arithmetic.

pub mod sentences;
