mod claimer;

use crate::config::Config;

use claimer::{build_transactions, check_claims};
use dialoguer::{theme::ColorfulTheme, Select};

const LOGO: &str = r#"
       _      _   _                        _       _
      (_) ___| |_| |_ ___  _ __        ___| | __ _(_)_ __ ___   ___ _ __
      | |/ _ \ __| __/ _ \| '_ \      / __| |/ _` | | '_ ` _ \ / _ \ '__|
      | |  __/ |_| || (_) | | | |    | (__| | (_| | | | | | | |  __/ |
     _/ |\___|\__|\__\___/|_| |_|     \___|_|\__,_|_|_| |_| |_|\___|_|
    |__/
"#;

pub async fn menu() -> eyre::Result<()> {
    let config = Config::read_default().await?;

    println!("{LOGO}");

    tracing::info!(
        "Airdrop `{}` on {}",
        config.airdrop_id,
        if config.testnet { "testnet" } else { "mainnet" }
    );

    loop {
        let options = vec!["Check claims", "Build claim transactions", "Exit"];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Choice:")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => check_claims(&config).await?,
            1 => build_transactions(&config).await?,
            2 => return Ok(()),
            _ => tracing::error!("Invalid selection"),
        }
    }
}
