//! # Kranos - gym membership records
//!
//! A command-line record-keeper for a small gym: members, group-class plans,
//! group-class memberships and personal-training (PT) memberships, all kept
//! in a single local SQLite file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use kranos::db::db::Db;
//! use kranos::libs::gym::Gym;
//!
//! # fn main() -> anyhow::Result<()> {
//! let gym = Gym::new(Db::open("kranos.db")?);
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let member = gym.add_member("Ana", None, None, day)?;
//! let plan = gym.add_group_plan("Basic", 61, 100.0)?;
//! gym.add_group_class_membership(member.id.unwrap(), plan.id.unwrap(), day, day)?;
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
