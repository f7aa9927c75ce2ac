//! Show command - print the effective configuration.
//!
//! Secrets never reach the output: the secret key is skipped entirely
//! and credentialed URLs have their password masked.

use crate::cli::ShowArgs;
use crate::config::Config;
use crate::errors::ConfigResult;

/// Print the effective configuration to stdout.
pub fn execute(args: ShowArgs, config: Config) -> ConfigResult<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{config:#?}");
    }
    Ok(())
}
