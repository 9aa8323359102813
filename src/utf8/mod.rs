pub mod char;
pub mod prefix;
pub mod string;

pub use char::char;
pub use prefix::{prefix_through, prefix_up_to, prefix_while};
pub use string::{Literal, literal};
