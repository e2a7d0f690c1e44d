pub mod traits;
pub use traits::{Dimension, Element, InnerProduct, MatVec};
