pub mod config;

use std::{future::Future, process::ExitCode};

/// Drive a script to completion. Any error aborts the remaining steps, is
/// printed to stderr, and turns into a failing exit status.
pub async fn run(script: impl Future<Output = anyhow::Result<()>>) -> ExitCode {
    match script.await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::process::ExitCode;

    use auction_admin::error::AdminError;

    use super::run;

    #[tokio::test]
    async fn test_success_exits_zero() {
        assert_eq!(run(async { Ok(()) }).await, ExitCode::SUCCESS);
    }

    #[tokio::test]
    async fn test_any_error_exits_one() {
        assert_eq!(
            run(async { Err(anyhow::anyhow!("execution reverted")) }).await,
            ExitCode::FAILURE
        );
        assert_eq!(
            run(async { Err(AdminError::NoSigner("sepolia".to_owned()).into()) }).await,
            ExitCode::FAILURE
        );
    }
}
