//! tokensec validator CLI
//!
//! Usage: `tokensec-validator [config.yaml] [bundles.yaml]`
//! - strict config load (unknown fields rejected)
//! - every bundle validated: access attribute first, then each token
//! - exit 1 when any bundle is rejected, 2 on startup errors

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use tokensec_validator::{bundle, config, DefinitionValidator};

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut args = std::env::args().skip(1);
    let cfg_path = args.next().unwrap_or_else(|| "tokensec.yaml".into());
    let bundles_path = args.next().unwrap_or_else(|| "tokens.yaml".into());

    let validator = match config::load_from_file(&cfg_path)
        .and_then(|cfg| DefinitionValidator::from_config(&cfg))
    {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(path = %cfg_path, error = %e, "config load failed");
            return ExitCode::from(2);
        }
    };

    let file = match bundle::load_from_file(&bundles_path) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!(path = %bundles_path, error = %e, "bundle load failed");
            return ExitCode::from(2);
        }
    };

    tracing::info!(config = %cfg_path, bundles = file.bundles.len(), "tokensec-validator starting");

    let mut rejected = 0usize;
    for b in &file.bundles {
        match validator.validate_bundle(b) {
            Ok(v) => println!("ok      {} access={} tokens={}", b.descriptor, v.access, v.tokens.len()),
            Err(e) => {
                rejected += 1;
                println!("error   {} [{}] {}", b.descriptor, e.kind().as_str(), e);
            }
        }
    }

    println!(
        "{} bundle(s) checked, {} rejected",
        file.bundles.len(),
        rejected
    );

    if rejected > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
