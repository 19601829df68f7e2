use super::{non_blank, prompt_date, prompt_optional, prompt_text, select_action};
use crate::{
    libs::{config::Config, gym::Gym, messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MemberArgs {
    #[command(subcommand)]
    command: Option<MemberCommand>,
}

#[derive(Debug, Subcommand)]
enum MemberCommand {
    /// Register a new member
    Add {
        /// Full name
        #[arg(short, long)]
        name: Option<String>,
        /// Email address
        #[arg(short, long)]
        email: Option<String>,
        /// Phone number
        #[arg(short, long)]
        phone: Option<String>,
        /// Join date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        join_date: Option<NaiveDate>,
    },
    /// List all members
    List,
}

pub fn cmd(args: MemberArgs) -> Result<()> {
    let gym = Gym::open()?;
    match args.command {
        Some(MemberCommand::Add {
            name,
            email,
            phone,
            join_date,
        }) => handle_add(&gym, name, email, phone, join_date),
        Some(MemberCommand::List) => handle_list(&gym),
        None => handle_interactive(&gym),
    }
}

fn handle_add(gym: &Gym, name: Option<String>, email: Option<String>, phone: Option<String>, join_date: Option<NaiveDate>) -> Result<()> {
    let (name, email, phone, join_date) = match name {
        Some(name) => (
            name.trim().to_string(),
            email.and_then(non_blank),
            phone.and_then(non_blank),
            join_date.unwrap_or_else(|| Local::now().date_naive()),
        ),
        None => (
            prompt_text(Message::PromptMemberName)?,
            prompt_optional(Message::PromptMemberEmail)?,
            prompt_optional(Message::PromptMemberPhone)?,
            prompt_date(Message::PromptJoinDate)?,
        ),
    };

    if name.is_empty() {
        msg_error!(Message::MemberNameRequired);
        return Ok(());
    }

    let member = gym.add_member(&name, email.as_deref(), phone.as_deref(), join_date)?;
    msg_success!(Message::MemberAdded(member.name));
    Ok(())
}

fn handle_list(gym: &Gym) -> Result<()> {
    let members = gym.list_members()?;

    if members.is_empty() {
        msg_info!(Message::NoMembersFound);
        return Ok(());
    }

    msg_print!(Message::MembersHeader, true);
    View::new(Config::read()?).members(&members)?;
    Ok(())
}

fn handle_interactive(gym: &Gym) -> Result<()> {
    match select_action(Message::SelectMemberAction, "Add member", "List members")? {
        0 => handle_add(gym, None, None, None, None),
        _ => handle_list(gym),
    }
}
