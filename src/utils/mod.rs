pub mod minify;
pub mod xml;
