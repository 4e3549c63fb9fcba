use figment::providers::{Env, Format, Toml};
use figment::Figment;
use num_bigint::BigInt;
use num_traits::Signed;
use serde::{Deserialize, Serialize};

use super::RangeVerifier;
use crate::protocol::gadgets::decimal;
use crate::{ClosedRange, Result, SecretOrderGroup};

/// Environment variable naming the TOML configuration file.
pub const CONFIG_PATH_VAR: &str = "RANGE_PROOF_CONFIG_PATH";

/// TOML file read when [`CONFIG_PATH_VAR`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/range_proof.toml";

/// Prefix of environment variables overriding file values.
pub const ENV_PREFIX: &str = "RANGE_PROOF_";

/// Verifier configuration: the group and the accepted range.
///
/// There are no defaults; group parameters must come from a trusted setup.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Hidden-order group parameters.
    pub group: GroupSettings,
    /// Inclusive lower limit of the range.
    #[serde(with = "decimal")]
    pub lower_limit: BigInt,
    /// Inclusive upper limit of the range.
    #[serde(with = "decimal")]
    pub upper_limit: BigInt,
}

/// Group parameters as written in configuration.
///
/// Values may be decimal strings or plain integers. Environment values of
/// any width are read as decimal; a TOML file only holds 64-bit integers,
/// so wider values there must be quoted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupSettings {
    /// Modulus `N`.
    #[serde(with = "decimal")]
    pub modulus: BigInt,
    /// Generator `g`.
    #[serde(with = "decimal")]
    pub g: BigInt,
    /// Generator `h`.
    #[serde(with = "decimal")]
    pub h: BigInt,
}

impl VerifierConfig {
    /// Loads configuration from a TOML file and environment variables.
    ///
    /// Configuration priority (highest to lowest):
    /// 1. Environment variables with `RANGE_PROOF_` prefix, using `__` to
    ///    separate nested keys (e.g., `RANGE_PROOF_GROUP__MODULUS`)
    /// 2. TOML configuration file (if exists)
    ///
    /// The TOML file path can be set via `RANGE_PROOF_CONFIG_PATH`. If not
    /// set, defaults to `./config/range_proof.toml`. If the file doesn't
    /// exist, it is silently skipped.
    ///
    /// # Environment Variable Examples
    /// ```bash
    /// RANGE_PROOF_GROUP__MODULUS=123763483659823661164839153854113
    /// RANGE_PROOF_GROUP__G=9978076495933337078596144096749
    /// RANGE_PROOF_GROUP__H=46959937887401751832025265468109
    /// RANGE_PROOF_LOWER_LIMIT=18
    /// RANGE_PROOF_UPPER_LIMIT=65
    /// ```
    ///
    /// # Errors
    /// Returns an error if a value is missing or malformed.
    #[allow(clippy::result_large_err)]
    pub fn from_env() -> figment::error::Result<Self> {
        Self::figment().extract()
    }

    /// Returns the provider stack used by [`from_env`](Self::from_env).
    pub fn figment() -> Figment {
        let config_path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        Figment::new()
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["config_path"]).split("__"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error message if the modulus is not positive or the range
    /// is empty.
    pub fn validate(&self) -> core::result::Result<(), String> {
        if !self.group.modulus.is_positive() {
            return Err(format!(
                "Group modulus must be positive, got {}",
                self.group.modulus
            ));
        }

        if self.lower_limit > self.upper_limit {
            return Err(format!(
                "lower_limit {} exceeds upper_limit {}",
                self.lower_limit, self.upper_limit
            ));
        }

        Ok(())
    }

    /// Builds the group described by the configuration.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParams`](crate::Error::InvalidParams) if the
    /// modulus is not positive.
    pub fn group(&self) -> Result<SecretOrderGroup> {
        SecretOrderGroup::new(
            self.group.modulus.clone(),
            self.group.g.clone(),
            self.group.h.clone(),
        )
    }

    /// Returns the configured range.
    pub fn range(&self) -> ClosedRange {
        ClosedRange::new(self.lower_limit.clone(), self.upper_limit.clone())
    }

    /// Builds a verifier for the configured range.
    pub fn verifier(&self) -> RangeVerifier {
        RangeVerifier::new(self.range())
    }
}
