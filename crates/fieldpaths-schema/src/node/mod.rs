mod class;
mod field;
mod pool;

pub use class::*;
pub use field::*;
pub use pool::*;
