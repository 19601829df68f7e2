use crate::{
    libs::{
        gym::Gym,
        import::{Importer, DEFAULT_GROUP_FILE, DEFAULT_PT_FILE},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV export of historical group-class members
    #[arg(long, default_value = DEFAULT_GROUP_FILE)]
    group_file: PathBuf,
    /// CSV export of historical personal-training members
    #[arg(long, default_value = DEFAULT_PT_FILE)]
    pt_file: PathBuf,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let gym = Gym::open()?;
    let summary = Importer::new(&gym).run(&args.group_file, &args.pt_file)?;

    msg_success!(
        Message::ImportFinished(summary.group_rows.unwrap_or_default(), summary.pt_rows.unwrap_or_default()),
        true
    );
    Ok(())
}
