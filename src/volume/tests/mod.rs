//! Unit tests for the volume module
//!
//! Covers the fixed points of each conversion, saturation, domain
//! violations, formatting and parsing.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use crate::volume::{
    Decibels, LinearFactor, Volume, VolumeError, db_to_volume, divide_volume, linear_to_volume,
    multiply_volume, volume_to_db, volume_to_linear,
};

fn linear(factor: f64) -> LinearFactor {
    LinearFactor::new(factor).unwrap()
}

#[test]
fn unity_and_silence_are_exact() {
    assert_eq!(linear_to_volume(LinearFactor::UNITY), Volume::NORM);
    assert_eq!(linear_to_volume(LinearFactor::SILENT), Volume::MUTED);
    assert_eq!(volume_to_linear(Volume::NORM).get(), 1.0);
    assert_eq!(volume_to_linear(Volume::MUTED).get(), 0.0);
}

#[test]
fn decibel_fixed_points() {
    assert_eq!(volume_to_db(Volume::NORM), Decibels::Finite(0.0));
    assert_eq!(volume_to_db(Volume::MUTED), Decibels::Silent);
    assert_eq!(volume_to_db(Volume::MUTED).as_f64(), f64::NEG_INFINITY);
    assert_eq!(db_to_volume(Decibels::Finite(0.0)), Volume::NORM);
    assert_eq!(db_to_volume(Decibels::Silent), Volume::MUTED);
    assert_eq!(
        db_to_volume(Decibels::new(f64::NEG_INFINITY).unwrap()),
        Volume::MUTED
    );
}

#[test]
fn cubic_mapping() {
    let half = Volume::new(Volume::NORM.raw() / 2).unwrap();
    assert_eq!(volume_to_linear(half).get(), 0.125);
    assert_eq!(linear_to_volume(linear(0.125)), half);
    assert_eq!(linear_to_volume(linear(8.0)).raw(), 2 * Volume::NORM.raw());
}

#[test]
fn below_norm_is_negative_db_above_is_positive() {
    let quiet = Volume::new(30000).unwrap();
    let loud = Volume::new(90000).unwrap();

    assert!(volume_to_db(quiet).as_f64() < 0.0);
    assert!(volume_to_db(loud).as_f64() > 0.0);
}

#[test]
fn full_range_round_trips() {
    for raw in 0..=2 * Volume::NORM.raw() {
        let volume = Volume::new(raw).unwrap();
        assert_eq!(linear_to_volume(volume_to_linear(volume)), volume, "linear {raw}");
        assert_eq!(db_to_volume(volume_to_db(volume)), volume, "dB {raw}");
    }
}

#[test]
fn linear_to_volume_is_monotonic() {
    let mut previous = Volume::MUTED;
    let mut factor = 0.0;
    while factor < 10.0 {
        let volume = linear_to_volume(linear(factor));
        assert!(volume >= previous, "{factor}");
        previous = volume;
        factor += 0.0013;
    }
}

#[test]
fn huge_factors_saturate() {
    assert_eq!(linear_to_volume(linear(1e30)), Volume::MAX);
    assert_eq!(linear_to_volume(linear(f64::INFINITY)), Volume::MAX);
    assert_eq!(db_to_volume(Decibels::Finite(10_000.0)), Volume::MAX);
}

#[test]
fn tiny_decibels_reach_silence() {
    assert_eq!(db_to_volume(Decibels::Finite(-1000.0)), Volume::MUTED);
}

#[test]
fn decibels_at_the_floor_are_muted() {
    let quietest = Volume::new(1).unwrap();
    assert!(volume_to_db(quietest).as_f64() > Decibels::FLOOR);
    assert_eq!(db_to_volume(volume_to_db(quietest)), quietest);

    assert_eq!(db_to_volume(Decibels::Finite(Decibels::FLOOR)), Volume::MUTED);
    assert_eq!(db_to_volume(Decibels::Finite(-300.0)), Volume::MUTED);
    assert_eq!(db_to_volume(Decibels::Finite(-306.0)), Volume::MUTED);
    assert_eq!(Volume::try_from_db(-295.0), Ok(Volume::MUTED));
}

#[test]
fn negative_and_nan_factors_are_rejected() {
    assert_eq!(
        LinearFactor::new(-0.5),
        Err(VolumeError::NegativeFactor { factor: -0.5 })
    );
    assert_eq!(LinearFactor::new(f64::NAN), Err(VolumeError::NotANumber));
    assert_eq!(Decibels::new(f64::NAN), Err(VolumeError::NotANumber));
    assert!(Volume::try_from_linear(-1.0).is_err());
    assert!(Volume::try_from_db(f64::NAN).is_err());
}

#[test]
fn raw_values_above_max_are_rejected() {
    assert!(Volume::new(Volume::MAX.raw()).is_ok());
    assert_eq!(
        Volume::new(u32::MAX),
        Err(VolumeError::OutOfRange {
            raw: u32::MAX,
            max: Volume::MAX.raw()
        })
    );
    assert_eq!(Volume::saturating(u64::MAX), Volume::MAX);
}

#[test]
fn multiply_identity_and_absorption() {
    for raw in (0..=4 * Volume::NORM.raw()).step_by(97) {
        let volume = Volume::new(raw).unwrap();
        assert_eq!(multiply_volume(Volume::NORM, volume), volume);
        assert_eq!(multiply_volume(volume, Volume::NORM), volume);
        assert_eq!(multiply_volume(Volume::MUTED, volume), Volume::MUTED);
    }
}

#[test]
fn multiply_saturates() {
    assert_eq!(multiply_volume(Volume::MAX, Volume::MAX), Volume::MAX);
}

#[test]
fn divide_undoes_multiply() {
    for a in (0..=2 * Volume::NORM.raw()).step_by(1009) {
        for b in (Volume::NORM.raw()..=4 * Volume::NORM.raw()).step_by(2003) {
            let a = Volume::new(a).unwrap();
            let b = Volume::new(b).unwrap();
            let back = divide_volume(multiply_volume(a, b), b);
            assert!(back.raw().abs_diff(a.raw()) <= 1, "{a:?} {b:?} -> {back:?}");
        }
    }
}

#[test]
fn divide_edge_cases() {
    let volume = Volume::new(12345).unwrap();
    assert_eq!(divide_volume(volume, Volume::NORM), volume);
    assert_eq!(divide_volume(volume, Volume::MUTED), Volume::MUTED);
    assert_eq!(divide_volume(Volume::MUTED, volume), Volume::MUTED);
}

#[test]
fn decibel_addition() {
    assert_eq!(
        Decibels::Finite(-3.0) + Decibels::Finite(-3.0),
        Decibels::Finite(-6.0)
    );
    assert_eq!(Decibels::Silent + Decibels::Finite(12.0), Decibels::Silent);
    assert_eq!(Decibels::Finite(12.0) + Decibels::Silent, Decibels::Silent);
}

#[test]
fn linear_product_with_infinity_and_zero_is_silent() {
    assert_eq!(linear(f64::INFINITY) * LinearFactor::SILENT, LinearFactor::SILENT);
}

#[test]
fn percent_conversions() {
    assert_eq!(Volume::from_percent(100.0).unwrap(), Volume::NORM);
    assert_eq!(Volume::from_percent(0.0).unwrap(), Volume::MUTED);
    assert_eq!(Volume::from_percent(50.0).unwrap().raw(), 32768);
    assert_eq!(Volume::NORM.percent(), 100.0);
    assert!(Volume::from_percent(-1.0).is_err());
}

#[test]
fn saturating_steps() {
    let step = Volume::new(0x1000).unwrap();
    assert_eq!(
        Volume::NORM.saturating_add(step, Volume::SAFE_MAX).raw(),
        0x11000
    );
    assert_eq!(
        Volume::SAFE_MAX.saturating_add(step, Volume::SAFE_MAX),
        Volume::SAFE_MAX
    );
    assert_eq!(
        Volume::MAX.saturating_add(step, Volume::MAX),
        Volume::MAX
    );
    assert_eq!(Volume::MUTED.saturating_sub(step), Volume::MUTED);
}

#[test]
fn formatting() {
    assert_eq!(Volume::NORM.to_string(), "100%");
    assert_eq!(Volume::MUTED.to_string(), "0%");
    assert_eq!(Volume::NORM.display_db(), "0.00 dB");
    assert_eq!(Volume::MUTED.display_db(), "-inf dB");
    assert_eq!(Volume::NORM.display_verbose(), "65536 / 100% / 0.00 dB");
    assert_eq!(format!("{:.1}", Decibels::Finite(-6.02)), "-6.0 dB");

    let half = Volume::new(32768).unwrap();
    assert_eq!(half.to_string(), "50%");
    assert_eq!(half.display_db(), "-18.06 dB");
}

#[test]
fn parse_accepted_forms() {
    assert_eq!("100%".parse::<Volume>().unwrap(), Volume::NORM);
    assert_eq!("50 %".parse::<Volume>().unwrap().raw(), 32768);
    assert_eq!("0dB".parse::<Volume>().unwrap(), Volume::NORM);
    assert_eq!("0 db".parse::<Volume>().unwrap(), Volume::NORM);
    assert_eq!("1".parse::<Volume>().unwrap(), Volume::NORM);
    assert_eq!("1.0".parse::<Volume>().unwrap(), Volume::NORM);
    assert_eq!("0.125".parse::<Volume>().unwrap().raw(), 32768);
    assert_eq!("#65536".parse::<Volume>().unwrap(), Volume::NORM);
    assert_eq!("mute".parse::<Volume>().unwrap(), Volume::MUTED);
    assert_eq!("-inf dB".parse::<Volume>().unwrap(), Volume::MUTED);
    assert_eq!(" 0 ".parse::<Volume>().unwrap(), Volume::MUTED);

    let attenuated = "-6dB".parse::<Volume>().unwrap();
    assert!(attenuated < Volume::NORM);
    assert!((volume_to_db(attenuated).as_f64() + 6.0).abs() < 0.01);
}

#[test]
fn parse_rejected_forms() {
    for input in ["", "loud", "50%%", "#-1", "-0.5", "-5%", "#4294967295", "1.0.0"] {
        assert!(input.parse::<Volume>().is_err(), "{input}");
    }

    assert_eq!(
        "loud".parse::<Volume>(),
        Err(VolumeError::InvalidVolumeSyntax {
            input: "loud".to_string()
        })
    );
}

#[test]
fn serde_rejects_out_of_range_raw_values() {
    let volume: Volume = serde_json::from_str("65536").unwrap();
    assert_eq!(volume, Volume::NORM);
    assert_eq!(serde_json::to_string(&Volume::NORM).unwrap(), "65536");
    assert!(serde_json::from_str::<Volume>("4294967295").is_err());
    assert!(serde_json::from_str::<LinearFactor>("-1.0").is_err());
}
