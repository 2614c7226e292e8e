pub mod interface;
pub mod list;
