pub mod error;
pub mod mongodb;
pub mod schemas;
