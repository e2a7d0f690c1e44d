pub mod tokens;
pub use tokens::Tokens;
