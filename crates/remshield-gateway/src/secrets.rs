//! Secret vault: caller-side defaulting for the obfuscation utility.
//!
//! The core hashes key/secret strings verbatim, empty or not; substituting
//! platform-wide defaults is the caller's job. The vault holds that default
//! material (from the `secrets` config section) and fills it in whenever the
//! caller-supplied key or secret is empty.

use remshield_core::error::Result;
use remshield_core::obfuscate;

use crate::config::SecretsSection;

#[derive(Debug, Clone)]
pub struct SecretVault {
    key: String,
    salt: String,
}

impl SecretVault {
    pub fn new(secrets: &SecretsSection) -> Self {
        Self {
            key: secrets.key.clone(),
            salt: secrets.salt.clone(),
        }
    }

    fn effective<'a>(&'a self, caller: &'a str, fallback: &'a str) -> &'a str {
        if caller.is_empty() {
            fallback
        } else {
            caller
        }
    }

    /// Seal with the vault's default material.
    pub fn seal(&self, value: &str) -> Result<String> {
        self.seal_with(value, "", "")
    }

    /// Seal, substituting vault defaults for empty key/secret.
    pub fn seal_with(&self, value: &str, key: &str, secret: &str) -> Result<String> {
        obfuscate::encrypt(
            value,
            self.effective(key, &self.key),
            self.effective(secret, &self.salt),
        )
    }

    /// Open with the vault's default material.
    pub fn unseal(&self, value: &str) -> Result<String> {
        self.unseal_with(value, "", "")
    }

    /// Open, substituting vault defaults for empty key/secret.
    pub fn unseal_with(&self, value: &str, key: &str, secret: &str) -> Result<String> {
        obfuscate::decrypt(
            value,
            self.effective(key, &self.key),
            self.effective(secret, &self.salt),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault() -> SecretVault {
        SecretVault::new(&SecretsSection {
            key: "platform-key".into(),
            salt: "platform-salt".into(),
        })
    }

    #[test]
    fn seal_unseal_round_trip_with_defaults() {
        let v = vault();
        let sealed = v.seal("api-token").unwrap();
        assert_eq!(v.unseal(&sealed).unwrap(), "api-token");
    }

    #[test]
    fn caller_material_wins_over_defaults() {
        let v = vault();
        let sealed = v.seal_with("api-token", "caller-key", "caller-salt").unwrap();
        assert_eq!(
            v.unseal_with(&sealed, "caller-key", "caller-salt").unwrap(),
            "api-token"
        );
        // default material must not open it in cipher builds
        if cfg!(feature = "cipher") {
            assert!(v.unseal(&sealed).is_err());
        }
    }

    #[test]
    fn empty_caller_material_falls_back_per_field() {
        let v = vault();
        let sealed = v.seal_with("api-token", "caller-key", "").unwrap();
        assert_eq!(
            v.unseal_with(&sealed, "caller-key", "").unwrap(),
            "api-token"
        );
    }
}
