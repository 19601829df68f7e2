use super::config::Config;
use crate::db::group_class_memberships::GroupClassMembershipListing;
use crate::db::group_plans::GroupPlan;
use crate::db::members::Member;
use crate::db::pt_memberships::PtMembershipListing;
use anyhow::Result;
use prettytable::{row, Table};

/// Read-only table screens for the list commands.
pub struct View {
    config: Config,
}

impl View {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn members(&self, members: &[Member]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "EMAIL", "PHONE", "JOIN DATE", "STATUS"]);
        for member in members {
            table.add_row(row![
                member.id.unwrap_or(0),
                member.name,
                member.email.as_deref().unwrap_or(""),
                member.phone.as_deref().unwrap_or(""),
                member.join_date,
                member.status
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn plans(&self, plans: &[GroupPlan]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DURATION", "PRICE"]);
        for plan in plans {
            table.add_row(row![
                plan.id.unwrap_or(0),
                plan.name,
                format!("{} days", plan.duration_days),
                self.config.format_price(plan.price)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn group_class_memberships(&self, memberships: &[GroupClassMembershipListing]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["MEMBER", "PLAN", "START DATE", "END DATE"]);
        for membership in memberships {
            table.add_row(row![membership.member_name, membership.plan_name, membership.start_date, membership.end_date]);
        }
        table.printstd();

        Ok(())
    }

    pub fn pt_memberships(&self, memberships: &[PtMembershipListing]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["MEMBER", "SESSIONS TOTAL", "SESSIONS USED"]);
        for membership in memberships {
            table.add_row(row![membership.member_name, membership.sessions_total, membership.sessions_used]);
        }
        table.printstd();

        Ok(())
    }
}
