use anyhow::Result;
use clap::Args;
use librus_api::Client;

use super::{describe_error, CredentialArgs, WindowArgs};
use crate::output::{print_homework, OutputFormat};

#[derive(Args)]
pub struct HomeworkArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[command(flatten)]
    pub window: WindowArgs,
}

pub async fn run(args: &HomeworkArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let entries = client
        .fetch_homework_data(
            &args.credentials.username,
            &args.credentials.password,
            args.window.window(),
        )
        .await
        .map_err(describe_error)?;

    if entries.is_empty() && *format != OutputFormat::Json {
        eprintln!("No homework in the selected window.");
        return Ok(());
    }
    print_homework(&entries, format);
    Ok(())
}
