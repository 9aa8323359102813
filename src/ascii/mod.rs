pub mod number;

pub use number::{Number, double, int, number};
