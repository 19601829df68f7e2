//! Core library modules for kranos.
//!
//! - [`gym`]: the domain API used by every command
//! - [`import`]: one-time CSV import of historical members
//! - [`config`] and [`data_storage`]: where settings and the database live
//! - [`view`] and [`messages`]: console output

pub mod config;
pub mod data_storage;
pub mod gym;
pub mod import;
pub mod messages;
pub mod view;
