//! Seal a message into a token or wrapped URL.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use qrseal::Sealer;
use tracing::debug;

use crate::ui;

pub fn run(
    text: Option<String>,
    infile: Option<&Path>,
    key: Option<String>,
    url: Option<&str>,
    out: Option<&Path>,
    qr: bool,
) -> Result<()> {
    let message: Vec<u8> = match (text, infile) {
        (Some(text), _) => text.into_bytes(),
        (None, Some(path)) => {
            fs::read(path).with_context(|| format!("reading message from {}", path.display()))?
        }
        (None, None) => bail!("provide a message with --text or --infile"),
    };

    let key = super::resolve_key(key);
    let keyed = key.is_some();
    let sealer = match key {
        Some(key) => Sealer::keyed(key),
        None => Sealer::unkeyed(),
    };
    debug!(len = message.len(), keyed, "sealing message");

    let output = match url {
        Some(base) => sealer.seal_into_url(base, &message)?,
        None => sealer.seal(&message).into_inner(),
    };

    match out {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("writing output to {}", path.display()))?;
            ui::success(&format!(
                "wrote {} bytes to {}",
                output.len(),
                path.display()
            ));
        }
        None => println!("{}", output),
    }

    if qr {
        ui::qr_code(&output)?;
    }

    if keyed {
        ui::info("sealed in hmac mode; verification requires the same key");
    }

    Ok(())
}
