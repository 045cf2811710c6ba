//! CLI command implementations.

pub mod decode;
pub mod encode;

use qrseal::SecretKey;

/// Environment variable consulted when --key is absent.
pub const KEY_ENV_VAR: &str = "QRSEAL_KEY";

/// Resolve the secret key from the flag or the environment.
///
/// Empty strings count as no key so `QRSEAL_KEY=""` does not flip a
/// pipeline into keyed mode by accident.
fn resolve_key(flag: Option<String>) -> Option<SecretKey> {
    flag.or_else(|| std::env::var(KEY_ENV_VAR).ok())
        .filter(|k| !k.is_empty())
        .map(|k| SecretKey::from_passphrase(&k))
}
