mod angles;

pub use angles::{signed_degrees, wrap_degrees};
