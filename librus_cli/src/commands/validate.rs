use anyhow::{bail, Result};
use clap::Args;
use librus_api::Client;

use super::{describe_error, CredentialArgs};
use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,
}

pub async fn run(args: &ValidateArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let valid = client
        .validate_credentials(&args.credentials.username, &args.credentials.password)
        .await
        .map_err(describe_error)?;

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "valid": valid })),
        _ if valid => println!("Credentials for {} are valid", args.credentials.username),
        _ => {}
    }

    if !valid {
        bail!("Librus rejected the credentials for {}", args.credentials.username);
    }
    Ok(())
}
