//! String forms of the enumerated units, exercised through the public API
use ctor::ctor;
use physkit_core::core_types::conversion::convert_distance;
use physkit_core::{
    AbbreviatedUnit, Altitude, AngleUnit, ClassificationLevel, DistanceUnit, EnumeratedUnit,
    PressureUnit, TemperatureUnit, ToolkitError,
};
use tracing_subscriber::EnvFilter;

#[ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_angle_unit_tokens() {
    assert_eq!(AngleUnit::Degrees.to_canonical_string(), "degrees");
    assert_eq!(AngleUnit::Radians.to_abbreviated_string(), " rad");
    assert_eq!(AngleUnit::Degrees.to_presentation_string(), "°");

    // The space before "rad" is significant
    assert_eq!(AngleUnit::abbreviated_value_of(Some(" RAD")), AngleUnit::Radians);
    assert_eq!(AngleUnit::abbreviated_value_of(Some("rad")), AngleUnit::Degrees);
}

#[test]
fn test_canonical_parse_is_strict_abbreviated_is_forgiving() {
    let err = TemperatureUnit::canonical_value_of(Some("rankine")).unwrap_err();
    assert_eq!(
        err,
        ToolkitError::InvalidArgument("No TemperatureUnit matches \"rankine\"".to_owned())
    );

    assert_eq!(TemperatureUnit::abbreviated_value_of(Some("°R")), TemperatureUnit::Kelvin);
    assert_eq!(TemperatureUnit::abbreviated_value_of(Some("°c")), TemperatureUnit::Celsius);
    assert_eq!(PressureUnit::abbreviated_value_of(Some("KPA")), PressureUnit::Kilopascals);
    assert_eq!(PressureUnit::abbreviated_value_of(None), PressureUnit::Pascals);
}

#[test]
fn test_unknown_ordinal_reports_type_and_value() {
    let err = DistanceUnit::from_ordinal(42).unwrap_err();
    assert_eq!(err.to_string(), "Unexpected DistanceUnit 42");
}

#[test]
fn test_altitude_bands_in_every_distance_unit() {
    for &unit in DistanceUnit::VARIANTS {
        let low = convert_distance(1000.0, DistanceUnit::Meters, unit).round() as i64;
        let high = convert_distance(5000.0, DistanceUnit::Meters, unit).round() as i64;
        let name = unit.to_canonical_string();

        assert_eq!(
            Altitude::Low.to_presentation_string(unit),
            format!("Below {low} {name}")
        );
        assert_eq!(
            Altitude::Medium.to_presentation_string(unit),
            format!("Between {low} and {high} {name}")
        );
        assert_eq!(
            Altitude::High.to_presentation_string(unit),
            format!("Above {high} {name}")
        );
    }
}

#[test]
fn test_altitude_in_feet() {
    assert_eq!(
        Altitude::Medium.to_presentation_string(DistanceUnit::Feet),
        "Between 3281 and 16404 feet"
    );
}

#[test]
fn test_classification_round_trips_through_text() {
    for &level in ClassificationLevel::VARIANTS {
        let display = level.to_string();
        assert!(!display.contains('_'), "{display} should use spaces");
        assert_eq!(display.parse::<ClassificationLevel>(), Ok(level));
        assert_eq!(
            ClassificationLevel::abbreviated_value_of(Some(&display.replace(' ', "_"))),
            level
        );
    }
}

#[test]
fn test_settings_file_uses_canonical_tokens() {
    #[derive(serde::Deserialize)]
    struct DisplayPreferences {
        angle: AngleUnit,
        temperature: TemperatureUnit,
        pressure: PressureUnit,
        distance: DistanceUnit,
        classification: ClassificationLevel,
    }

    let prefs: DisplayPreferences = serde_json::from_str(
        r#"{
            "angle": "Radians",
            "temperature": "celsius",
            "pressure": "MILLIBARS",
            "distance": "miles",
            "classification": "top secret"
        }"#,
    )
    .unwrap();

    assert_eq!(prefs.angle, AngleUnit::Radians);
    assert_eq!(prefs.temperature, TemperatureUnit::Celsius);
    assert_eq!(prefs.pressure, PressureUnit::Millibars);
    assert_eq!(prefs.distance, DistanceUnit::Miles);
    assert_eq!(prefs.classification, ClassificationLevel::TopSecret);

    let bad = serde_json::from_str::<DisplayPreferences>(
        r#"{"angle":"turns","temperature":"kelvin","pressure":"pascals","distance":"meters","classification":"secret"}"#,
    );
    assert!(bad.is_err());
}
