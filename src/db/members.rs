//! Member records.
//!
//! A member is a person tracked by the gym, independent of any membership
//! purchase. Members are written once and never updated or deleted.

use crate::db::db::Db;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const INSERT_MEMBER: &str = "INSERT INTO members (name, email, phone, join_date, status) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_MEMBERS: &str = "SELECT id, name, email, phone, join_date, status FROM members ORDER BY name, id";
const SELECT_MEMBER_BY_NAME: &str = "SELECT id, name, email, phone, join_date, status FROM members WHERE name = ?1 ORDER BY id DESC LIMIT 1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStatus {
    Active,
    Inactive,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "Active",
            MemberStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown member status '{0}'")]
pub struct ParseStatusError(pub String);

impl FromStr for MemberStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(MemberStatus::Active),
            "Inactive" => Ok(MemberStatus::Inactive),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

impl ToSql for MemberStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for MemberStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: Option<i64>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub join_date: NaiveDate,
    pub status: MemberStatus,
}

impl Member {
    /// A not-yet-persisted member. New members always start `Active`.
    pub fn new(name: &str, email: Option<String>, phone: Option<String>, join_date: NaiveDate) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            email,
            phone,
            join_date,
            status: MemberStatus::Active,
        }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Member {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            phone: row.get(3)?,
            join_date: row.get(4)?,
            status: row.get(5)?,
        })
    }
}

pub struct Members<'a> {
    conn: &'a Connection,
}

impl<'a> Members<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Persists `member` and returns it with the assigned id.
    pub fn insert(&self, member: &Member) -> Result<Member> {
        self.conn.execute(
            INSERT_MEMBER,
            params![member.name, member.email, member.phone, member.join_date, member.status],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name = %member.name, "member inserted");

        Ok(Member {
            id: Some(id),
            ..member.clone()
        })
    }

    /// All members ordered by name.
    pub fn list(&self) -> Result<Vec<Member>> {
        let mut stmt = self.conn.prepare(SELECT_MEMBERS)?;
        let member_iter = stmt.query_map([], Member::from_row)?;

        let mut members = Vec::new();
        for member in member_iter {
            members.push(member?);
        }
        Ok(members)
    }

    /// Member registered under exactly `name`. Names are not unique; the most
    /// recent registration wins.
    pub fn get_by_name(&self, name: &str) -> Result<Option<Member>> {
        self.conn
            .query_row(SELECT_MEMBER_BY_NAME, params![name], Member::from_row)
            .optional()
            .map_err(Into::into)
    }
}
