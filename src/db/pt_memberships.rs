use crate::db::db::Db;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};

const INSERT_PT_MEMBERSHIP: &str = "INSERT INTO pt_memberships
    (member_id, sessions_total, sessions_used, price, payment_date)
    VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_LISTING: &str = "
    SELECT m.name, pt.sessions_total, pt.sessions_used
    FROM pt_memberships pt
    JOIN members m ON pt.member_id = m.id
    ORDER BY m.name, pt.id
";

/// A purchased block of personal-training sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct PtMembership {
    pub id: Option<i64>,
    pub member_id: i64,
    pub sessions_total: i64,
    pub sessions_used: i64,
    pub price: f64,
    pub payment_date: NaiveDate,
}

/// Display row for the PT membership list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PtMembershipListing {
    pub member_name: String,
    pub sessions_total: i64,
    pub sessions_used: i64,
}

pub struct PtMemberships<'a> {
    conn: &'a Connection,
}

impl<'a> PtMemberships<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    pub fn insert(&self, membership: &PtMembership) -> Result<PtMembership> {
        self.conn.execute(
            INSERT_PT_MEMBERSHIP,
            params![
                membership.member_id,
                membership.sessions_total,
                membership.sessions_used,
                membership.price,
                membership.payment_date
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, member_id = membership.member_id, "pt membership inserted");

        Ok(PtMembership {
            id: Some(id),
            ..membership.clone()
        })
    }

    /// Member name and session counts, ordered by member name.
    pub fn list(&self) -> Result<Vec<PtMembershipListing>> {
        let mut stmt = self.conn.prepare(SELECT_LISTING)?;
        let listing_iter = stmt.query_map([], |row| {
            Ok(PtMembershipListing {
                member_name: row.get(0)?,
                sessions_total: row.get(1)?,
                sessions_used: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
            })
        })?;

        let mut listings = Vec::new();
        for listing in listing_iter {
            listings.push(listing?);
        }
        Ok(listings)
    }
}
