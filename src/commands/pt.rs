use super::{prompt_date, select_action, select_member};
use crate::{
    libs::{config::Config, gym::Gym, messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct PtArgs {
    #[command(subcommand)]
    command: Option<PtCommand>,
}

#[derive(Debug, Subcommand)]
enum PtCommand {
    /// Record a block of personal-training sessions
    Add {
        /// Member id (picked from a list when omitted)
        #[arg(short, long)]
        member_id: Option<i64>,
        /// Number of sessions purchased
        #[arg(short, long)]
        sessions: Option<i64>,
        /// Amount paid
        #[arg(short, long)]
        price: Option<f64>,
        /// Payment date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        payment_date: Option<NaiveDate>,
    },
    /// List personal-training memberships
    List,
}

pub fn cmd(args: PtArgs) -> Result<()> {
    let gym = Gym::open()?;
    match args.command {
        Some(PtCommand::Add {
            member_id,
            sessions,
            price,
            payment_date,
        }) => handle_add(&gym, member_id, sessions, price, payment_date),
        Some(PtCommand::List) => handle_list(&gym),
        None => handle_interactive(&gym),
    }
}

fn handle_add(gym: &Gym, member_id: Option<i64>, sessions: Option<i64>, price: Option<f64>, payment_date: Option<NaiveDate>) -> Result<()> {
    let interactive = member_id.is_none();

    let member_id = match member_id {
        Some(id) => Some(id),
        None => select_member(gym)?,
    };
    let Some(member_id) = member_id else {
        return Ok(());
    };

    let sessions = match sessions {
        Some(sessions) => sessions,
        None => {
            let positive_msg = Message::SessionsMustBePositive.to_string();
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSessions.to_string())
                .default(10)
                .validate_with(|input: &i64| -> Result<(), &str> {
                    if *input > 0 {
                        Ok(())
                    } else {
                        Err(positive_msg.as_str())
                    }
                })
                .interact_text()?
        }
    };
    if sessions <= 0 {
        msg_error!(Message::SessionsMustBePositive);
        return Ok(());
    }

    let price = match price {
        Some(price) => price,
        None => {
            let price_msg = Message::PriceMustNotBeNegative.to_string();
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPtPrice.to_string())
                .default(0.0)
                .validate_with(|input: &f64| -> Result<(), &str> {
                    if *input >= 0.0 {
                        Ok(())
                    } else {
                        Err(price_msg.as_str())
                    }
                })
                .interact_text()?
        }
    };
    if price < 0.0 {
        msg_error!(Message::PriceMustNotBeNegative);
        return Ok(());
    }

    let payment_date = match payment_date {
        Some(date) => date,
        None if interactive => prompt_date(Message::PromptPaymentDate)?,
        None => Local::now().date_naive(),
    };

    let membership = gym.add_pt_membership(member_id, sessions, price, payment_date)?;
    msg_success!(Message::PtMembershipAdded(membership.id.unwrap_or_default(), membership.sessions_total));
    Ok(())
}

fn handle_list(gym: &Gym) -> Result<()> {
    let memberships = gym.list_pt_memberships()?;

    if memberships.is_empty() {
        msg_info!(Message::NoPtMembershipsFound);
        return Ok(());
    }

    msg_print!(Message::PtMembershipsHeader, true);
    View::new(Config::read()?).pt_memberships(&memberships)?;
    Ok(())
}

fn handle_interactive(gym: &Gym) -> Result<()> {
    match select_action(Message::SelectPtAction, "Add PT sessions", "List PT memberships")? {
        0 => handle_add(gym, None, None, None, None),
        _ => handle_list(gym),
    }
}
