mod macros;
pub mod traits;

pub use traits::{Component, Promote, Promoted};
