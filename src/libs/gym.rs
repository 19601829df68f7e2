//! Domain API over the record store.
//!
//! [`Gym`] owns the injected [`Db`] handle and is the only entry point the
//! command layer uses. It builds records from primitive inputs, derives the
//! computed fields and delegates persistence to the repositories in
//! [`crate::db`].
//!
//! The one real business rule lives in
//! [`Gym::add_group_class_membership`]: the end date is derived from the
//! plan's duration and the plan's price is copied onto the membership at
//! write time. The copy is the historical record of what was paid; changing
//! a plan's price afterwards must never alter existing memberships.
//!
//! No input validation happens here. Empty names, non-positive durations and
//! negative prices are the caller's responsibility.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use kranos::db::db::Db;
//! use kranos::libs::gym::Gym;
//!
//! let gym = Gym::new(Db::open_in_memory()?);
//! let day = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
//! let member = gym.add_member("Ana", Some("ana@x.com"), Some("555-1000"), day)?;
//! let plan = gym.add_group_plan("Basic", 30, 100.0)?;
//! let membership = gym.add_group_class_membership(member.id.unwrap(), plan.id.unwrap(), day, day)?;
//! assert_eq!(membership.end_date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::db::Db;
use crate::db::group_class_memberships::{GroupClassMembership, GroupClassMembershipListing, GroupClassMemberships};
use crate::db::group_plans::{GroupPlan, GroupPlans};
use crate::db::members::{Member, Members};
use crate::db::pt_memberships::{PtMembership, PtMembershipListing, PtMemberships};
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use thiserror::Error;

/// Failures raised by the domain layer itself. Storage errors are passed
/// through untouched as `rusqlite::Error`.
#[derive(Debug, Error, PartialEq)]
pub enum GymError {
    #[error("Group plan with id {0} not found")]
    PlanNotFound(i64),
    #[error("End date out of range: {start} + {days} days")]
    EndDateOutOfRange { start: NaiveDate, days: i64 },
}

/// Last day of a membership that starts on `start_date` and lasts
/// `duration_days`. Plain calendar arithmetic, no time zones involved.
pub fn end_date_for(start_date: NaiveDate, duration_days: i64) -> Result<NaiveDate, GymError> {
    Duration::try_days(duration_days)
        .and_then(|duration| start_date.checked_add_signed(duration))
        .ok_or(GymError::EndDateOutOfRange {
            start: start_date,
            days: duration_days,
        })
}

pub struct Gym {
    db: Db,
}

impl Gym {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Opens the configured database.
    pub fn open() -> Result<Self> {
        Ok(Self::new(Db::new()?))
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    pub fn list_members(&self) -> Result<Vec<Member>> {
        Members::new(&self.db).list()
    }

    /// Registers a new `Active` member. Names and emails are not checked for
    /// uniqueness.
    pub fn add_member(&self, name: &str, email: Option<&str>, phone: Option<&str>, join_date: NaiveDate) -> Result<Member> {
        let member = Member::new(name, email.map(str::to_string), phone.map(str::to_string), join_date);
        Members::new(&self.db).insert(&member)
    }

    pub fn list_group_plans(&self) -> Result<Vec<GroupPlan>> {
        GroupPlans::new(&self.db).list()
    }

    pub fn add_group_plan(&self, name: &str, duration_days: i64, price: f64) -> Result<GroupPlan> {
        GroupPlans::new(&self.db).insert(&GroupPlan::new(name, duration_days, price))
    }

    pub fn list_group_class_memberships(&self) -> Result<Vec<GroupClassMembershipListing>> {
        GroupClassMemberships::new(&self.db).list()
    }

    /// Records a group-class purchase of `plan_id` by `member_id`.
    ///
    /// The plan lookup and the insert are separate statements. A plan that
    /// is unknown at lookup time fails with [`GymError::PlanNotFound`] and
    /// nothing is written.
    ///
    /// The typed error is a chosen resolution: the required behavior is only
    /// that the call fails without persisting a row, and how that failure is
    /// reported is still open for product clarification. Callers that care
    /// can `downcast_ref::<GymError>()`.
    pub fn add_group_class_membership(
        &self,
        member_id: i64,
        plan_id: i64,
        start_date: NaiveDate,
        payment_date: NaiveDate,
    ) -> Result<GroupClassMembership> {
        let plan = GroupPlans::new(&self.db)
            .get_by_id(plan_id)?
            .ok_or(GymError::PlanNotFound(plan_id))?;
        let end_date = end_date_for(start_date, plan.duration_days)?;

        let membership = GroupClassMembership {
            id: None,
            member_id,
            plan_id,
            start_date,
            end_date,
            // Snapshot: the membership keeps this price even if the plan changes.
            price: plan.price,
            payment_date,
        };
        GroupClassMemberships::new(&self.db).insert(&membership)
    }

    pub fn list_pt_memberships(&self) -> Result<Vec<PtMembershipListing>> {
        PtMemberships::new(&self.db).list()
    }

    /// Records a block of PT sessions. Used sessions always start at zero.
    pub fn add_pt_membership(&self, member_id: i64, sessions_total: i64, price: f64, payment_date: NaiveDate) -> Result<PtMembership> {
        let membership = PtMembership {
            id: None,
            member_id,
            sessions_total,
            sessions_used: 0,
            price,
            payment_date,
        };
        PtMemberships::new(&self.db).insert(&membership)
    }
}
