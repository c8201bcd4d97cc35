//! # Storefront
//!
//! Session layer of the Bistro ordering front-end, plus a CLI that replays
//! a recorded session script and prints the resulting views as JSON.
//!
//! ## Module Organization
//! ```text
//! storefront/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── state/
//! │   ├── config.rs   ◄─── ConfigState (env overrides, currency format)
//! │   └── session.rs  ◄─── Session (owns the Cart)
//! ├── commands/
//! │   ├── cart.rs     ◄─── Cart panel commands
//! │   ├── product.rs  ◄─── Product page
//! │   └── order.rs    ◄─── Order history page
//! ├── script.rs       ◄─── JSON session replay
//! └── error.rs        ◄─── API error type
//! ```

pub mod commands;
pub mod error;
pub mod script;
pub mod state;

use std::io::Read;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use script::Script;
use state::{ConfigState, Session};

/// Runs the replay CLI.
///
/// ## Arguments
/// `args` excludes the program name. The first argument is the script
/// path; without it (or with `-`) the script is read from stdin.
///
/// ## Startup Sequence
/// 1. Initialize logging (stderr, `RUST_LOG` aware)
/// 2. Load configuration from the environment
/// 3. Read and parse the script
/// 4. Start a session, replay, print the output to stdout
pub fn run<I>(args: I) -> Result<(), ApiError>
where
    I: IntoIterator<Item = String>,
{
    init_tracing();

    let config = ConfigState::from_env();
    info!(restaurant = %config.restaurant_slug, "Starting storefront replay");

    let source = read_script(args.into_iter().next())?;
    let script = Script::from_json(&source)?;

    let mut session = Session::new(config.restaurant_slug.clone());
    let output = script::replay(&mut session, &script, &config);

    println!("{}", serde_json::to_string_pretty(&output)?);

    session.end();
    Ok(())
}

fn read_script(path: Option<String>) -> Result<String, ApiError> {
    match path.as_deref() {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => {
            info!(path, "Reading session script");
            Ok(std::fs::read_to_string(path)?)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for this crate only
/// - Default: INFO, DEBUG for storefront
///
/// Logs go to stderr; stdout carries only the JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use uuid::Uuid;

    fn temp_path() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("storefront-{}.json", Uuid::new_v4()))
    }

    #[test]
    fn test_read_script_from_file() {
        let path = temp_path();
        std::fs::write(&path, r#"{ "actions": [ { "type": "toggleCart" } ] }"#).unwrap();

        let source = read_script(Some(path.to_string_lossy().into_owned()));
        std::fs::remove_file(&path).unwrap();

        let script = Script::from_json(&source.unwrap()).unwrap();
        assert_eq!(script.actions.len(), 1);
    }

    #[test]
    fn test_read_script_missing_file_is_internal_error() {
        let path = temp_path();

        let err = read_script(Some(path.to_string_lossy().into_owned())).unwrap_err();
        assert_eq!(err.code, ErrorCode::Internal);
    }

    #[test]
    fn test_run_fails_on_missing_script() {
        let err = run(vec![temp_path().to_string_lossy().into_owned()]).unwrap_err();
        assert_eq!(err.code, ErrorCode::Internal);
    }
}
