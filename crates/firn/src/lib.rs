mod error;
mod generator;
mod id;
#[cfg(feature = "net")]
mod identity;
mod time;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
#[cfg(feature = "net")]
pub use crate::identity::*;
pub use crate::time::*;
