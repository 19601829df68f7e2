//! Database layer for the kranos application.
//!
//! A thin record store over SQLite: one repository per table, each borrowing
//! the single [`db::Db`] handle. Repositories only insert and list; nothing
//! in the application updates or deletes a row.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use kranos::db::{db::Db, members::{Member, Members}};
//!
//! let db = Db::open("kranos.db")?;
//! let member = Member::new("Ana", None, None, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//! let saved = Members::new(&db).insert(&member)?;
//! assert!(saved.id.is_some());
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Store handle: connection setup, foreign keys and schema bootstrap.
pub mod db;

/// Idempotent creation of the four record tables.
pub mod schema;

/// People tracked by the gym.
pub mod members;

/// Duration and price templates for group classes.
pub mod group_plans;

/// Purchased group-class memberships and their list projection.
pub mod group_class_memberships;

/// Purchased personal-training session blocks and their list projection.
pub mod pt_memberships;
