pub mod identity;
pub mod select;
