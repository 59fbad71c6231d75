//! Timing configuration of the playback protocol.

use super::error::TimingError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed delays driving playback and the pause between rounds.
///
/// Serialized as whole milliseconds. Missing fields fall back to the
/// defaults.
///
/// # Example
///
/// ```rust
/// use simon::engine::Timing;
/// use std::time::Duration;
///
/// let timing = Timing::from_json(r#"{ "beat": 500, "flash": 250 }"#).unwrap();
///
/// assert_eq!(timing.beat, Duration::from_millis(500));
/// assert_eq!(timing.flash, Duration::from_millis(250));
/// assert_eq!(timing.success_pause, Duration::from_millis(1000));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Interval between two shown elements of the sequence
    #[serde(with = "millis")]
    pub beat: Duration,
    /// How long a pad stays lit within one beat
    #[serde(with = "millis")]
    pub flash: Duration,
    /// Pause between a completed round and the next playback
    #[serde(with = "millis")]
    pub success_pause: Duration,
}

impl Timing {
    pub const DEFAULT_BEAT: Duration = Duration::from_millis(600);
    pub const DEFAULT_FLASH: Duration = Duration::from_millis(400);
    pub const DEFAULT_SUCCESS_PAUSE: Duration = Duration::from_millis(1000);

    /// Parse and validate a JSON timing object.
    pub fn from_json(json: &str) -> Result<Self, TimingError> {
        let timing: Timing = serde_json::from_str(json)?;
        timing.validate()?;
        Ok(timing)
    }

    /// Check that a flash fits inside a beat, so that a pad is dark again
    /// before the next one lights up.
    pub fn validate(&self) -> Result<(), TimingError> {
        if self.beat.is_zero() {
            return Err(TimingError::ZeroBeat);
        }
        if self.flash >= self.beat {
            return Err(TimingError::FlashTooLong {
                flash: self.flash,
                beat: self.beat,
            });
        }
        Ok(())
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            beat: Self::DEFAULT_BEAT,
            flash: Self::DEFAULT_FLASH,
            success_pause: Self::DEFAULT_SUCCESS_PAUSE,
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_is_valid() {
        let timing = Timing::default();

        assert_eq!(timing.beat, Duration::from_millis(600));
        assert_eq!(timing.flash, Duration::from_millis(400));
        assert_eq!(timing.success_pause, Duration::from_millis(1000));
        assert!(timing.validate().is_ok());
    }

    #[test]
    fn zero_beat_is_rejected() {
        let timing = Timing {
            beat: Duration::ZERO,
            flash: Duration::ZERO,
            ..Timing::default()
        };

        assert!(matches!(timing.validate(), Err(TimingError::ZeroBeat)));
    }

    #[test]
    fn flash_must_end_before_next_beat() {
        let timing = Timing {
            flash: Duration::from_millis(600),
            ..Timing::default()
        };

        assert!(matches!(
            timing.validate(),
            Err(TimingError::FlashTooLong { .. })
        ));
    }

    #[test]
    fn serializes_as_milliseconds() {
        let json = serde_json::to_value(Timing::default()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"beat": 600, "flash": 400, "success_pause": 1000})
        );
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let result = Timing::from_json("{ \"beat\": \"fast\" }");

        assert!(matches!(result, Err(TimingError::Parse(_))));
    }

    #[test]
    fn from_json_validates() {
        let result = Timing::from_json(r#"{ "beat": 300 }"#);

        assert!(matches!(result, Err(TimingError::FlashTooLong { .. })));
    }
}
