//! Purchased group-class memberships.
//!
//! `price` is the plan price at purchase time. It is stored on the membership
//! row and never re-read from `group_plans`, so later plan price changes do
//! not rewrite history.

use crate::db::db::Db;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};

const INSERT_MEMBERSHIP: &str = "INSERT INTO group_class_memberships
    (member_id, plan_id, start_date, end_date, price, payment_date)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_LISTING: &str = "
    SELECT m.name, gp.name, gcm.start_date, gcm.end_date
    FROM group_class_memberships gcm
    JOIN members m ON gcm.member_id = m.id
    JOIN group_plans gp ON gcm.plan_id = gp.id
    ORDER BY gcm.end_date DESC, gcm.id
";

#[derive(Debug, Clone, PartialEq)]
pub struct GroupClassMembership {
    pub id: Option<i64>,
    pub member_id: i64,
    pub plan_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: f64,
    pub payment_date: NaiveDate,
}

/// Display row for the group-class membership list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupClassMembershipListing {
    pub member_name: String,
    pub plan_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub struct GroupClassMemberships<'a> {
    conn: &'a Connection,
}

impl<'a> GroupClassMemberships<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Persists the membership as given. Only the declared foreign keys guard
    /// `member_id` and `plan_id`.
    pub fn insert(&self, membership: &GroupClassMembership) -> Result<GroupClassMembership> {
        self.conn.execute(
            INSERT_MEMBERSHIP,
            params![
                membership.member_id,
                membership.plan_id,
                membership.start_date,
                membership.end_date,
                membership.price,
                membership.payment_date
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, member_id = membership.member_id, plan_id = membership.plan_id, "group class membership inserted");

        Ok(GroupClassMembership {
            id: Some(id),
            ..membership.clone()
        })
    }

    /// Member name, plan name and dates, latest end date first.
    pub fn list(&self) -> Result<Vec<GroupClassMembershipListing>> {
        let mut stmt = self.conn.prepare(SELECT_LISTING)?;
        let listing_iter = stmt.query_map([], |row| {
            Ok(GroupClassMembershipListing {
                member_name: row.get(0)?,
                plan_name: row.get(1)?,
                start_date: row.get(2)?,
                end_date: row.get(3)?,
            })
        })?;

        let mut listings = Vec::new();
        for listing in listing_iter {
            listings.push(listing?);
        }
        Ok(listings)
    }
}
