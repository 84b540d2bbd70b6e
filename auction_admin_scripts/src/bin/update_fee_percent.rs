use std::process::ExitCode;

use auction_admin::admin;
use auction_admin_scripts::{
    config::{auction_address, new_fee_percent, ScriptConfig},
    run,
};

#[tokio::main]
async fn main() -> ExitCode {
    run(update_fee_percent()).await
}

async fn update_fee_percent() -> anyhow::Result<()> {
    let conf = ScriptConfig::load();
    let network = conf.connect()?;

    admin::update_fee_percent(&network, auction_address()?, new_fee_percent()?).await?;

    Ok(())
}
