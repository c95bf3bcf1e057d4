pub mod format;
pub mod runtime;
