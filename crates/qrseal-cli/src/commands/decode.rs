//! Verify a token or token-bearing URL and report the outcome.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use qrseal::{MessageView, Sealer};
use tracing::debug;

use crate::ui;

pub fn run(
    input: Option<String>,
    infile: Option<&Path>,
    key: Option<String>,
    restore: Option<&Path>,
) -> Result<bool> {
    let input = match (input, infile) {
        (Some(input), _) => input,
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("reading token from {}", path.display()))?
            .trim()
            .to_string(),
        (None, None) => bail!("provide a token, a URL, or --infile"),
    };

    let sealer = match super::resolve_key(key) {
        Some(key) => Sealer::keyed(key),
        None => Sealer::unkeyed(),
    };

    let result = sealer.open(&input);
    debug!(valid = result.valid, "verification complete");

    ui::verdict(result.valid);
    if let Some(metadata) = result.metadata {
        ui::key_value("mode", metadata.mode.as_str());
        if let Some(ts) = metadata.timestamp {
            ui::key_value("sealed at", &ts.to_rfc3339());
        }
    }
    if let Some(view) = &result.message {
        match view {
            MessageView::Text(text) => ui::key_value("message", text),
            MessageView::Binary(bytes) => ui::key_value(
                "message",
                &format!("{} binary bytes, base64 {}", bytes.len(), view.display_string()),
            ),
        }
    }
    if let Some(reason) = &result.reason {
        ui::key_value("reason", &reason.to_string());
    }

    if let Some(path) = restore {
        match &result.message {
            Some(view) if result.valid => {
                fs::write(path, view.as_bytes())
                    .with_context(|| format!("restoring message to {}", path.display()))?;
                ui::success(&format!(
                    "restored {} bytes to {}",
                    view.as_bytes().len(),
                    path.display()
                ));
            }
            _ => ui::error("nothing restored: message did not verify"),
        }
    }

    Ok(result.valid)
}
