//! Domain logic for the bugtrail service.
//!
//! Pure types and validation helpers with no database or HTTP dependencies,
//! shared by the persistence and API layers.

pub mod bug;
pub mod error;
pub mod types;
