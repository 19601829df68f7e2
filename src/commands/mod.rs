//! Command-line interface for kranos.
//!
//! Each entity gets a subcommand with `add` and `list` actions. Running a
//! subcommand without an action opens an interactive menu, and `add` prompts
//! for any required value that was not passed as a flag. Required-field
//! checks happen here, before the domain layer is called.

pub mod group;
pub mod import;
pub mod init;
pub mod member;
pub mod plan;
pub mod pt;

use crate::libs::gym::Gym;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Register and list members")]
    Member(member::MemberArgs),
    #[command(about = "Define and list group-class plans")]
    Plan(plan::PlanArgs),
    #[command(about = "Record and list group-class memberships")]
    Group(group::GroupArgs),
    #[command(about = "Record and list personal-training memberships")]
    Pt(pt::PtArgs),
    #[command(about = "Import historical members from CSV exports")]
    Import(import::ImportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Member(args) => member::cmd(args),
            Commands::Plan(args) => plan::cmd(args),
            Commands::Group(args) => group::cmd(args),
            Commands::Pt(args) => pt::cmd(args),
            Commands::Import(args) => import::cmd(args),
        }
    }
}

/// Picks one of `Add` / `List` when a subcommand is run without an action.
pub(crate) fn select_action(prompt: Message, add_label: &str, list_label: &str) -> Result<usize> {
    let options = vec![add_label, list_label];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&options)
        .default(0)
        .interact()?;
    Ok(selection)
}

pub(crate) fn prompt_text(prompt: Message) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Optional text input: blank means "not provided".
pub(crate) fn prompt_optional(prompt: Message) -> Result<Option<String>> {
    Ok(non_blank(prompt_text(prompt)?))
}

pub(crate) fn prompt_date(prompt: Message) -> Result<NaiveDate> {
    let date = Input::<NaiveDate>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(Local::now().date_naive())
        .interact_text()?;
    Ok(date)
}

pub(crate) fn non_blank(value: String) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Lets the user pick a member from the live list. `None` when there are no
/// members yet.
pub(crate) fn select_member(gym: &Gym) -> Result<Option<i64>> {
    let members = gym.list_members()?;
    if members.is_empty() {
        msg_warning!(Message::AddMembersFirst);
        return Ok(None);
    }

    let names: Vec<String> = members.iter().map(|m| m.name.clone()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectMember.to_string())
        .items(&names)
        .default(0)
        .interact()?;
    Ok(members[selection].id)
}
