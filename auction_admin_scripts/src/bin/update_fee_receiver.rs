use std::process::ExitCode;

use auction_admin::admin;
use auction_admin_scripts::{
    config::{auction_address, new_fee_receiver, ScriptConfig},
    run,
};

#[tokio::main]
async fn main() -> ExitCode {
    run(update_fee_receiver()).await
}

async fn update_fee_receiver() -> anyhow::Result<()> {
    let conf = ScriptConfig::load();
    let network = conf.connect()?;

    admin::update_fee_receiver(&network, auction_address()?, new_fee_receiver()?).await?;

    Ok(())
}
