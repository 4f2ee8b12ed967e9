pub mod create;
pub mod libraries;
pub mod list;
