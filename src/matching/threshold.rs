//! Length-adaptive similarity thresholds.

use serde::{Deserialize, Serialize};

use crate::error::{HushError, Result};

/// Step function mapping word length to the minimum similarity ratio a
/// fuzzy match must reach.
///
/// Short words are matched exactly only: their neighborhoods are dense with
/// harmless near-misses. The threshold relaxes as words get longer, where a
/// single typo moves the ratio less.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    /// Words shorter than this (in code points) match exactly only.
    pub short_len: usize,
    /// Words at or beyond this length use `long_ratio`.
    pub long_len: usize,
    /// Ratio required for mid-length words.
    pub mid_ratio: f64,
    /// Ratio required for long words.
    pub long_ratio: f64,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        ThresholdPolicy {
            short_len: 4,
            long_len: 10,
            mid_ratio: 0.9,
            long_ratio: 0.8,
        }
    }
}

impl ThresholdPolicy {
    /// Minimum similarity ratio for a word of `length` code points.
    pub fn threshold_for(&self, length: usize) -> f64 {
        if length < self.short_len {
            1.0
        } else if length < self.long_len {
            self.mid_ratio
        } else {
            self.long_ratio
        }
    }

    /// Check that the policy is a non-increasing step function with ratios
    /// in (0, 1].
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("mid_ratio", self.mid_ratio), ("long_ratio", self.long_ratio)] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(HushError::invalid_config(format!(
                    "{name} must lie in (0, 1], got {value}"
                )));
            }
        }
        if self.long_ratio > self.mid_ratio {
            return Err(HushError::invalid_config(
                "long_ratio must not exceed mid_ratio",
            ));
        }
        if self.short_len > self.long_len {
            return Err(HushError::invalid_config(
                "short_len must not exceed long_len",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands() {
        let policy = ThresholdPolicy::default();
        assert_eq!(policy.threshold_for(3), 1.0);
        assert_eq!(policy.threshold_for(4), 0.9);
        assert_eq!(policy.threshold_for(9), 0.9);
        assert_eq!(policy.threshold_for(10), 0.8);
        assert_eq!(policy.threshold_for(50), 0.8);
    }

    #[test]
    fn test_non_increasing() {
        let policy = ThresholdPolicy::default();
        let mut last = f64::INFINITY;
        for length in 0..64 {
            let threshold = policy.threshold_for(length);
            assert!(threshold <= last);
            last = threshold;
        }
    }

    #[test]
    fn test_validate_default() {
        assert!(ThresholdPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_ratio() {
        let policy = ThresholdPolicy {
            mid_ratio: 0.0,
            ..ThresholdPolicy::default()
        };
        assert!(policy.validate().is_err());

        let policy = ThresholdPolicy {
            long_ratio: 1.5,
            ..ThresholdPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_increasing_steps() {
        let policy = ThresholdPolicy {
            mid_ratio: 0.7,
            long_ratio: 0.9,
            ..ThresholdPolicy::default()
        };
        assert!(policy.validate().is_err());

        let policy = ThresholdPolicy {
            short_len: 12,
            ..ThresholdPolicy::default()
        };
        assert!(policy.validate().is_err());
    }
}
