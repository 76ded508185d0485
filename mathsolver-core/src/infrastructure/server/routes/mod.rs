pub mod page;
pub mod sessions;
pub mod tools;
