use crate::algebra::SettingsError;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest block size used by the blocked factorization
pub const NBMAX: usize = 32;

const DEFAULT_BLOCK_SIZE: usize = 32;
const DEFAULT_BLOCKED_MIN_BANDWIDTH: usize = 64;

/// Tuning parameters for [`BandCholeskyEngine`](crate::banded::BandCholeskyEngine)
///
/// The blocked factorization is used only when the bandwidth exceeds
/// `blocked_min_bandwidth`, and with a block size of `block_size` clamped
/// to [`NBMAX`].  Any block size gives results equal to the unblocked
/// factorization up to rounding.

#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BandCholeskySettings {
    ///block size for the blocked factorization
    #[builder(default = "DEFAULT_BLOCK_SIZE")]
    pub block_size: usize,

    ///bandwidths up to this value always use the unblocked factorization
    #[builder(default = "DEFAULT_BLOCKED_MIN_BANDWIDTH")]
    pub blocked_min_bandwidth: usize,
}

impl Default for BandCholeskySettings {
    fn default() -> BandCholeskySettings {
        BandCholeskySettings {
            block_size: DEFAULT_BLOCK_SIZE,
            blocked_min_bandwidth: DEFAULT_BLOCKED_MIN_BANDWIDTH,
        }
    }
}

impl BandCholeskySettings {
    /// Checks that the settings are valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_block_size(self.block_size)
    }

    /// Block size that will be used for a matrix of bandwidth `kd`,
    /// or `None` if the unblocked factorization applies.
    pub(crate) fn effective_block_size(&self, kd: usize) -> Option<usize> {
        let nb = self.block_size.min(NBMAX);
        if kd <= self.blocked_min_bandwidth || nb <= 1 || kd < nb {
            None
        } else {
            Some(nb)
        }
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for BandCholeskySettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        BandCholeskySettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl BandCholeskySettingsBuilder {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(block_size) = self.block_size {
            validate_block_size(block_size)?;
        }
        Ok(())
    }
}

fn validate_block_size(block_size: usize) -> Result<(), SettingsError> {
    if block_size == 0 {
        Err(SettingsError::BadFieldValue("block_size"))
    } else {
        Ok(())
    }
}

#[test]
fn test_settings_validate() {
    let settings = BandCholeskySettingsBuilder::default().build().unwrap();
    assert_eq!(settings, BandCholeskySettings::default());
    assert_eq!(settings.block_size, 32);
    assert_eq!(settings.blocked_min_bandwidth, 64);

    // fail on a zero block size
    assert!(BandCholeskySettingsBuilder::default()
        .block_size(0)
        .build()
        .is_err());

    // directly construct bad settings and manually check
    let settings = BandCholeskySettings {
        block_size: 0,
        ..BandCholeskySettings::default()
    };
    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_block_size_selection() {
    let settings = BandCholeskySettings::default();
    assert_eq!(settings.effective_block_size(64), None);
    assert_eq!(settings.effective_block_size(65), Some(32));

    // oversized blocks are clamped
    let settings = BandCholeskySettingsBuilder::default()
        .block_size(100)
        .blocked_min_bandwidth(0)
        .build()
        .unwrap();
    assert_eq!(settings.effective_block_size(40), Some(NBMAX));
    assert_eq!(settings.effective_block_size(20), None);

    let settings = BandCholeskySettingsBuilder::default()
        .block_size(1)
        .blocked_min_bandwidth(0)
        .build()
        .unwrap();
    assert_eq!(settings.effective_block_size(10), None);
}
