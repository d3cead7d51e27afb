//! Configuration command handler.
//!
//! Prints the resolved settings with the source of each value (default,
//! configuration file, or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "cat_player": {
//!     "value": "cat",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &config::ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "cat_player": {
            "value": config.cat_player,
            "source": sources.cat_player,
        },
        "mouse_player": {
            "value": config.mouse_player,
            "source": sources.mouse_player,
        },
        "hints": {
            "value": config.hints,
            "source": sources.hints,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_values_with_sources() {
        let resolved = config::load_from(|key| match key {
            config::ENV_MOUSE => Some("jerry".to_string()),
            _ => None,
        })
        .unwrap();

        let mut out = Vec::new();
        write_resolved(&resolved, &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["cat_player"]["value"], "cat");
        assert_eq!(v["cat_player"]["source"], "default");
        assert_eq!(v["mouse_player"]["value"], "jerry");
        assert_eq!(v["mouse_player"]["source"], "env");
        assert_eq!(v["hints"]["value"], false);
    }
}
