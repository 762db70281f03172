//! Infrastructure implementations of the core gateway traits.

mod media_fs;
mod translations;

pub use self::{media_fs::*, translations::*};
