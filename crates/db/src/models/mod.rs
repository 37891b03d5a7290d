//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` DTO for inbound writes where the entity is writable

pub mod category;
pub mod product;
pub mod role;
pub mod user;
