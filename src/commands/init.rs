//! Configuration initialization command.
//!
//! Runs the setup wizard, saves `config.json` and creates the database
//! tables at the chosen location so the first real command starts from a
//! ready store.

use crate::{
    db::db::Db,
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration file instead of creating a new one.
    /// The database itself is left untouched.
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(&config_file_path)?;
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_info!(Message::ConfigFileNotFound);
        }
        return Ok(());
    }

    let config = Config::init()?;
    config.save()?;
    msg_success!(Message::ConfigSaved);

    let db_path = config.db_path()?;
    Db::open(&db_path)?;
    msg_success!(Message::DatabaseReady(db_path.display().to_string()));
    Ok(())
}
