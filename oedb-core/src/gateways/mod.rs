pub mod media;
pub mod translate;
