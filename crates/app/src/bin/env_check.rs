// Manticore diagnostic - prints the configuration the process would run with.
// A missing required setting terminates the script with the load error.

use manticore_app::env_report;
use manticore_common::{PublicConfig, SecretConfig};

fn main() -> anyhow::Result<()> {
    let public = PublicConfig::from_env()?;
    let secrets = SecretConfig::from_env()?;

    print!("{}", env_report(&public, &secrets));
    Ok(())
}
