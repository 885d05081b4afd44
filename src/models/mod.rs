pub mod arguments;
pub mod entry;
