//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus the insert/update records its repository accepts.

pub mod booking;
pub mod room;
