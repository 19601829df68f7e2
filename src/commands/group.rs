use super::{prompt_date, select_action, select_member};
use crate::{
    libs::{config::Config, gym::Gym, messages::Message, view::View},
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Args)]
pub struct GroupArgs {
    #[command(subcommand)]
    command: Option<GroupCommand>,
}

#[derive(Debug, Subcommand)]
enum GroupCommand {
    /// Record a group-class membership purchase
    Add {
        /// Member id (picked from a list when omitted)
        #[arg(short, long)]
        member_id: Option<i64>,
        /// Plan id (picked from a list when omitted)
        #[arg(short, long)]
        plan_id: Option<i64>,
        /// First day of the membership (YYYY-MM-DD)
        #[arg(short, long)]
        start_date: Option<NaiveDate>,
        /// Payment date (YYYY-MM-DD)
        #[arg(long)]
        payment_date: Option<NaiveDate>,
    },
    /// List group-class memberships, latest end date first
    List,
}

pub fn cmd(args: GroupArgs) -> Result<()> {
    let gym = Gym::open()?;
    match args.command {
        Some(GroupCommand::Add {
            member_id,
            plan_id,
            start_date,
            payment_date,
        }) => handle_add(&gym, member_id, plan_id, start_date, payment_date),
        Some(GroupCommand::List) => handle_list(&gym),
        None => handle_interactive(&gym),
    }
}

fn select_plan(gym: &Gym) -> Result<Option<i64>> {
    let plans = gym.list_group_plans()?;
    if plans.is_empty() {
        msg_warning!(Message::AddPlansFirst);
        return Ok(None);
    }

    let labels: Vec<String> = plans.iter().map(|p| format!("{} ({} days)", p.name, p.duration_days)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectPlan.to_string())
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(plans[selection].id)
}

fn handle_add(
    gym: &Gym,
    member_id: Option<i64>,
    plan_id: Option<i64>,
    start_date: Option<NaiveDate>,
    payment_date: Option<NaiveDate>,
) -> Result<()> {
    let interactive = member_id.is_none() || plan_id.is_none();

    let member_id = match member_id {
        Some(id) => Some(id),
        None => select_member(gym)?,
    };
    let Some(member_id) = member_id else {
        return Ok(());
    };

    let plan_id = match plan_id {
        Some(id) => Some(id),
        None => select_plan(gym)?,
    };
    let Some(plan_id) = plan_id else {
        return Ok(());
    };

    let today = Local::now().date_naive();
    let start_date = match start_date {
        Some(date) => date,
        None if interactive => prompt_date(Message::PromptStartDate)?,
        None => today,
    };
    let payment_date = match payment_date {
        Some(date) => date,
        None if interactive => prompt_date(Message::PromptPaymentDate)?,
        None => today,
    };

    let membership = gym.add_group_class_membership(member_id, plan_id, start_date, payment_date)?;
    msg_success!(Message::GroupMembershipAdded(membership.id.unwrap_or_default(), membership.end_date.to_string()));
    Ok(())
}

fn handle_list(gym: &Gym) -> Result<()> {
    let memberships = gym.list_group_class_memberships()?;

    if memberships.is_empty() {
        msg_info!(Message::NoGroupMembershipsFound);
        return Ok(());
    }

    msg_print!(Message::GroupMembershipsHeader, true);
    View::new(Config::read()?).group_class_memberships(&memberships)?;
    Ok(())
}

fn handle_interactive(gym: &Gym) -> Result<()> {
    match select_action(Message::SelectGroupAction, "Add group membership", "List group memberships")? {
        0 => handle_add(gym, None, None, None, None),
        _ => handle_list(gym),
    }
}
