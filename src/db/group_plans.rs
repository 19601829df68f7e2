use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_PLAN: &str = "INSERT INTO group_plans (name, duration_days, price) VALUES (?1, ?2, ?3)";
const SELECT_PLANS: &str = "SELECT id, name, duration_days, price FROM group_plans ORDER BY name, id";
const SELECT_PLAN_BY_ID: &str = "SELECT id, name, duration_days, price FROM group_plans WHERE id = ?1";

/// A reusable duration + price template for group-class memberships.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPlan {
    pub id: Option<i64>,
    pub name: String,
    pub duration_days: i64,
    pub price: f64,
}

impl GroupPlan {
    pub fn new(name: &str, duration_days: i64, price: f64) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            duration_days,
            price,
        }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(GroupPlan {
            id: row.get(0)?,
            name: row.get(1)?,
            duration_days: row.get(2)?,
            price: row.get(3)?,
        })
    }
}

pub struct GroupPlans<'a> {
    conn: &'a Connection,
}

impl<'a> GroupPlans<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    pub fn insert(&self, plan: &GroupPlan) -> Result<GroupPlan> {
        self.conn.execute(INSERT_PLAN, params![plan.name, plan.duration_days, plan.price])?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name = %plan.name, "group plan inserted");

        Ok(GroupPlan {
            id: Some(id),
            ..plan.clone()
        })
    }

    /// All plans ordered by name.
    pub fn list(&self) -> Result<Vec<GroupPlan>> {
        let mut stmt = self.conn.prepare(SELECT_PLANS)?;
        let plan_iter = stmt.query_map([], GroupPlan::from_row)?;

        let mut plans = Vec::new();
        for plan in plan_iter {
            plans.push(plan?);
        }
        Ok(plans)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<GroupPlan>> {
        self.conn
            .query_row(SELECT_PLAN_BY_ID, params![id], GroupPlan::from_row)
            .optional()
            .map_err(Into::into)
    }
}
