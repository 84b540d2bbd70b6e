use std::process::ExitCode;

use auction_admin::admin;
use auction_admin_scripts::{
    config::{deploy_params, ScriptConfig},
    run,
};

#[tokio::main]
async fn main() -> ExitCode {
    run(deploy()).await
}

async fn deploy() -> anyhow::Result<()> {
    let conf = ScriptConfig::load();
    let network = conf.connect()?;

    admin::deploy(&network, &deploy_params()?).await?;

    Ok(())
}
