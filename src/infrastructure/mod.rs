//! Infrastructure: persistence layer

pub mod database;
