use super::{prompt_text, select_action};
use crate::{
    libs::{config::Config, gym::Gym, messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(subcommand)]
    command: Option<PlanCommand>,
}

#[derive(Debug, Subcommand)]
enum PlanCommand {
    /// Define a new group-class plan
    Add {
        /// Plan name
        #[arg(short, long)]
        name: Option<String>,
        /// Length of the plan in days
        #[arg(short, long)]
        duration_days: Option<i64>,
        /// Plan price
        #[arg(short, long)]
        price: Option<f64>,
    },
    /// List all group-class plans
    List,
}

pub fn cmd(args: PlanArgs) -> Result<()> {
    let gym = Gym::open()?;
    match args.command {
        Some(PlanCommand::Add { name, duration_days, price }) => handle_add(&gym, name, duration_days, price),
        Some(PlanCommand::List) => handle_list(&gym),
        None => handle_interactive(&gym),
    }
}

fn handle_add(gym: &Gym, name: Option<String>, duration_days: Option<i64>, price: Option<f64>) -> Result<()> {
    let name = match name {
        Some(name) => name.trim().to_string(),
        None => prompt_text(Message::PromptPlanName)?,
    };
    if name.is_empty() {
        msg_error!(Message::PlanNameRequired);
        return Ok(());
    }

    let duration_days = match duration_days {
        Some(days) => days,
        None => {
            let positive_msg = Message::DurationMustBePositive.to_string();
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPlanDuration.to_string())
                .default(30)
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
    if duration_days <= 0 {
        msg_error!(Message::DurationMustBePositive);
        return Ok(());
    }

    let price = match price {
        Some(price) => price,
        None => {
            let price_msg = Message::PriceMustNotBeNegative.to_string();
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPlanPrice.to_string())
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

    let plan = gym.add_group_plan(&name, duration_days, price)?;
    msg_success!(Message::PlanAdded(plan.name));
    Ok(())
}

fn handle_list(gym: &Gym) -> Result<()> {
    let plans = gym.list_group_plans()?;

    if plans.is_empty() {
        msg_info!(Message::NoPlansFound);
        return Ok(());
    }

    msg_print!(Message::PlansHeader, true);
    View::new(Config::read()?).plans(&plans)?;
    Ok(())
}

fn handle_interactive(gym: &Gym) -> Result<()> {
    match select_action(Message::SelectPlanAction, "Add plan", "List plans")? {
        0 => handle_add(gym, None, None, None),
        _ => handle_list(gym),
    }
}
