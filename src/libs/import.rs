//! One-time import of historical members from spreadsheet CSV exports.
//!
//! Two files are read:
//!
//! - **Group classes** (`Client Name`, `Phone`, `Plan Start Date`, `Amount`):
//!   each row creates a member and a group-class membership under the default
//!   plan. Historical memberships always ran for 90 days and keep the amount
//!   actually paid, so they are written straight to the record store instead
//!   of going through the plan-derived path in [`Gym`].
//! - **Personal training** (`Client Name`, `Session Count`, `Amount Paid`,
//!   `Payment Date`): each row reuses the most recently registered member
//!   with the same name, or creates one joined today, and adds a PT membership.
//!
//! Dates are `day/month/year` with a two- or four-digit year. Amounts may carry
//! a currency prefix and thousands separators. A missing file is skipped with a
//! warning; any other failure aborts the import.

use crate::db::group_class_memberships::{GroupClassMembership, GroupClassMemberships};
use crate::db::group_plans::GroupPlan;
use crate::db::members::Members;
use crate::libs::gym::{end_date_for, Gym};
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_info, msg_success, msg_warning};
use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const DEFAULT_GROUP_FILE: &str = "Kranos MMA Members.xlsx - GC.csv";
pub const DEFAULT_PT_FILE: &str = "Kranos MMA Members.xlsx - PT.csv";

/// Every historical group-class membership is assumed to have lasted this long.
pub const HISTORICAL_DURATION_DAYS: i64 = 90;

pub const DEFAULT_PLAN_NAME: &str = "Default MMA - 90 Days";
pub const DEFAULT_PLAN_PRICE: f64 = 12000.0;

#[derive(Debug, Deserialize)]
struct GroupRow {
    #[serde(rename = "Client Name")]
    client_name: String,
    #[serde(rename = "Phone", default)]
    phone: Option<String>,
    #[serde(rename = "Plan Start Date")]
    plan_start_date: String,
    #[serde(rename = "Amount")]
    amount: String,
}

#[derive(Debug, Deserialize)]
struct PtRow {
    #[serde(rename = "Client Name")]
    client_name: String,
    #[serde(rename = "Session Count")]
    session_count: String,
    #[serde(rename = "Amount Paid")]
    amount_paid: String,
    #[serde(rename = "Payment Date")]
    payment_date: String,
}

/// Rows imported per file. `None` means the file was missing and skipped.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImportSummary {
    pub group_rows: Option<usize>,
    pub pt_rows: Option<usize>,
}

/// Parses `dd/mm/yyyy` or `dd/mm/yy`. Two-digit years land in 1970-2069.
pub fn parse_date_flexible(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    let year_digits = value.rsplit('/').next().map(str::len).unwrap_or_default();
    let format = if year_digits == 2 { "%d/%m/%y" } else { "%d/%m/%Y" };
    NaiveDate::parse_from_str(value, format).with_context(|| format!("invalid date '{}'", value))
}

/// Parses a money amount such as `₹12,000`, `Rs. 12,000` or `$ 1,500.50`.
///
/// Everything before the first digit or sign is a currency prefix and is
/// dropped; `,` separators are removed. Anything else must be a plain number.
pub fn parse_amount(value: &str) -> Result<f64> {
    let number = value.trim().trim_start_matches(|c: char| !c.is_ascii_digit() && c != '-');
    let cleaned = number.replace(',', "");
    cleaned.parse::<f64>().with_context(|| format!("invalid amount '{}'", value.trim()))
}

/// Parses a session count, tolerating spreadsheet floats like `10.0`.
fn parse_count(value: &str) -> Result<i64> {
    let value = value.trim();
    if let Ok(count) = value.parse::<i64>() {
        return Ok(count);
    }
    match value.parse::<f64>() {
        Ok(count) if count.fract() == 0.0 => Ok(count as i64),
        _ => Err(anyhow!("invalid session count '{}'", value)),
    }
}

/// Reads a CSV export, falling back to Windows-1252 for files that are not
/// valid UTF-8. Returns `None` when the file does not exist.
fn read_text(path: &Path) -> Result<Option<String>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", path.display())),
    };

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => encoding_rs::WINDOWS_1252.decode(e.as_bytes()).0.into_owned(),
    };
    Ok(Some(text.trim_start_matches('\u{feff}').to_string()))
}

fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(text.as_bytes())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub struct Importer<'a> {
    gym: &'a Gym,
}

impl<'a> Importer<'a> {
    pub fn new(gym: &'a Gym) -> Self {
        Self { gym }
    }

    /// Imports both files. Group-class rows are attached to the default plan.
    pub fn run(&self, group_path: &Path, pt_path: &Path) -> Result<ImportSummary> {
        let plan = self.ensure_default_plan()?;
        let group_rows = self.import_group_members(group_path, &plan)?;
        let pt_rows = self.import_pt_members(pt_path)?;
        Ok(ImportSummary { group_rows, pt_rows })
    }

    /// Returns the first plan by name, creating the 90-day default plan when
    /// no plans exist yet.
    pub fn ensure_default_plan(&self) -> Result<GroupPlan> {
        if let Some(plan) = self.gym.list_group_plans()?.into_iter().next() {
            return Ok(plan);
        }

        let plan = self.gym.add_group_plan(DEFAULT_PLAN_NAME, HISTORICAL_DURATION_DAYS, DEFAULT_PLAN_PRICE)?;
        msg_info!(Message::ImportDefaultPlanCreated(plan.name.clone()));
        Ok(plan)
    }

    pub fn import_group_members(&self, path: &Path, plan: &GroupPlan) -> Result<Option<usize>> {
        let plan_id = plan.id.ok_or_else(|| msg_error_anyhow!(Message::NoIdSet))?;
        msg_info!(Message::ImportReading(path.display().to_string()));
        let Some(text) = read_text(path)? else {
            msg_warning!(Message::ImportFileMissing(path.display().to_string()));
            return Ok(None);
        };

        let memberships = GroupClassMemberships::new(self.gym.db());
        let mut count = 0;
        for (line, row) in csv_reader(&text).deserialize::<GroupRow>().enumerate() {
            let row = row.with_context(|| format!("{}: malformed row {}", path.display(), line + 1))?;
            let start_date = parse_date_flexible(&row.plan_start_date)?;
            let price = parse_amount(&row.amount)?;

            let member = self.gym.add_member(&row.client_name, None, non_empty(row.phone).as_deref(), start_date)?;
            let member_id = member.id.ok_or_else(|| msg_error_anyhow!(Message::NoIdSet))?;

            memberships.insert(&GroupClassMembership {
                id: None,
                member_id,
                plan_id,
                start_date,
                end_date: end_date_for(start_date, HISTORICAL_DURATION_DAYS)?,
                price,
                payment_date: start_date,
            })?;
            count += 1;
        }

        msg_success!(Message::ImportGroupCompleted(count));
        Ok(Some(count))
    }

    pub fn import_pt_members(&self, path: &Path) -> Result<Option<usize>> {
        msg_info!(Message::ImportReading(path.display().to_string()));
        let Some(text) = read_text(path)? else {
            msg_warning!(Message::ImportFileMissing(path.display().to_string()));
            return Ok(None);
        };

        let members = Members::new(self.gym.db());
        let today = Local::now().date_naive();
        let mut count = 0;
        for (line, row) in csv_reader(&text).deserialize::<PtRow>().enumerate() {
            let row = row.with_context(|| format!("{}: malformed row {}", path.display(), line + 1))?;

            let member = match members.get_by_name(&row.client_name)? {
                Some(member) => member,
                None => self.gym.add_member(&row.client_name, None, None, today)?,
            };
            let member_id = member.id.ok_or_else(|| msg_error_anyhow!(Message::NoIdSet))?;

            self.gym.add_pt_membership(
                member_id,
                parse_count(&row.session_count)?,
                parse_amount(&row.amount_paid)?,
                parse_date_flexible(&row.payment_date)?,
            )?;
            count += 1;
        }

        msg_success!(Message::ImportPtCompleted(count));
        Ok(Some(count))
    }
}
