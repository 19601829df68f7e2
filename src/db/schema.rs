//! Schema bootstrap for the four record tables.
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so running
//! [`ensure_schema`] on each start is safe. There is no version tracking:
//! the initial tables are the only schema the application ever creates.

use anyhow::{Context, Result};
use rusqlite::Connection;

const SCHEMA_MEMBERS: &str = "CREATE TABLE IF NOT EXISTS members (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT,
    phone TEXT,
    join_date TEXT NOT NULL,
    status TEXT NOT NULL CHECK(status IN ('Active', 'Inactive'))
)";

const SCHEMA_GROUP_PLANS: &str = "CREATE TABLE IF NOT EXISTS group_plans (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    duration_days INTEGER NOT NULL,
    price REAL NOT NULL
)";

const SCHEMA_GROUP_CLASS_MEMBERSHIPS: &str = "CREATE TABLE IF NOT EXISTS group_class_memberships (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    member_id INTEGER NOT NULL,
    plan_id INTEGER NOT NULL,
    start_date TEXT NOT NULL,
    end_date TEXT NOT NULL,
    price REAL NOT NULL,
    payment_date TEXT NOT NULL,
    FOREIGN KEY (member_id) REFERENCES members(id),
    FOREIGN KEY (plan_id) REFERENCES group_plans(id)
)";

const SCHEMA_PT_MEMBERSHIPS: &str = "CREATE TABLE IF NOT EXISTS pt_memberships (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    member_id INTEGER NOT NULL,
    sessions_total INTEGER NOT NULL,
    sessions_used INTEGER DEFAULT 0,
    price REAL NOT NULL,
    payment_date TEXT NOT NULL,
    FOREIGN KEY (member_id) REFERENCES members(id)
)";

/// Table names in creation order. Referenced tables come first.
pub const TABLES: [&str; 4] = ["members", "group_plans", "group_class_memberships", "pt_memberships"];

const SCHEMAS: [&str; 4] = [SCHEMA_MEMBERS, SCHEMA_GROUP_PLANS, SCHEMA_GROUP_CLASS_MEMBERSHIPS, SCHEMA_PT_MEMBERSHIPS];

/// Creates any of the four tables that do not exist yet.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    for (table, schema) in TABLES.iter().zip(SCHEMAS.iter()) {
        conn.execute(schema, []).with_context(|| format!("failed to create {} table", table))?;
    }
    tracing::debug!("schema ready: {}", TABLES.join(", "));
    Ok(())
}
