//! Display and conversion tests for all error variants.

use exosense_errors::prelude::*;

#[test]
fn test_config_display_snapshots() {
    insta::assert_snapshot!(
        ConfigError::ZeroSampleCount.to_string(),
        @"calibration sample count must be greater than zero"
    );
    insta::assert_snapshot!(
        ConfigError::InvalidSamplingFrequency { hz: 0 }.to_string(),
        @"sampling frequency 0 Hz is invalid (must be 1..=1000000)"
    );
    insta::assert_snapshot!(
        ConfigError::unspecified_model("purple", "i").to_string(),
        @"unspecified model parameters: material 'purple', direction 'i'"
    );
    insta::assert_snapshot!(
        ConfigError::InvalidTransition { from: "Idle", to: "Streaming" }.to_string(),
        @"invalid phase transition from Idle to Streaming"
    );
}

#[test]
fn test_wrapped_display_prefixes() {
    let err: ExoError = ConfigError::ZeroSampleCount.into();
    assert!(err.to_string().starts_with("Configuration error: "));

    let err: ExoError = HalError::GyroRead.into();
    assert_eq!(err.to_string(), "Hardware error: gyroscope read failed");

    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
    let err: ExoError = io.into();
    assert_eq!(err.category(), ErrorCategory::Io);
    assert_eq!(err.severity(), ErrorSeverity::Error);
}

#[test]
fn test_parse_and_other_errors() {
    let err: ExoError = ConfigError::Parse {
        reason: "unknown field `sampling_hz`".into(),
    }
    .into();
    assert!(err.is_fatal());
    assert!(err.to_string().contains("failed to parse configuration"));

    let err = ExoError::Other("Calibration not complete: 1 of 4 samples".into());
    assert_eq!(err.category(), ErrorCategory::Other);
    assert_eq!(err.category().to_string(), "other");
    assert!(!err.is_fatal());
}

#[test]
fn test_question_mark_conversion() -> std::result::Result<(), Box<dyn std::error::Error>> {
    fn validate(n: u32) -> Result<u32> {
        if n == 0 {
            return Err(ConfigError::ZeroSampleCount.into());
        }
        Ok(n)
    }

    assert_eq!(validate(3)?, 3);
    match validate(0) {
        Err(ExoError::Config(ConfigError::ZeroSampleCount)) => {}
        other => return Err(format!("unexpected result: {other:?}").into()),
    }
    Ok(())
}

mod proptest_display {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn invalid_value_message_contains_field_and_reason(reason in "[a-z ]{1,32}") {
            let err = ConfigError::invalid_value("precision", reason.clone());
            let msg = err.to_string();
            prop_assert!(msg.contains("precision"));
            prop_assert!(msg.contains(reason.as_str()));
        }

        #[test]
        fn frequency_message_contains_value(hz in 1_000_001u32..=u32::MAX) {
            let msg = ConfigError::InvalidSamplingFrequency { hz }.to_string();
            prop_assert!(msg.contains(&hz.to_string()));
        }
    }
}
