//! 명령줄 인자 → 변환 요청 → 결과 문자열까지의 경로를 확인한다.
use clap::Parser;
use unitswap::app::{self, AppError, Overrides};
use unitswap::bridge::BridgePolicy;
use unitswap::cli::Cli;
use unitswap::config::Config;
use unitswap::conversion::{format_magnitude, ConversionError};
use unitswap::i18n::Language;
use unitswap::quantity::Domain;
use unitswap::request::{ConversionRequest, DensityArg};

fn request(args: &[&str], config: &Config) -> Result<ConversionRequest, AppError> {
    let cli = Cli::try_parse_from(args).expect("cli parse");
    let command = cli.command.expect("subcommand");
    app::request_for(&command, config)
}

#[test]
fn mass_subcommand_becomes_scalar_request() {
    let req = request(&["unitswap", "mass", "1000", "g", "kg"], &Config::default()).unwrap();
    assert_eq!(
        req,
        ConversionRequest::Scalar {
            domain: Domain::Mass,
            value: 1000.0,
            from: "g".to_string(),
            to: "kg".to_string(),
        }
    );
    let result = req.execute().unwrap();
    assert_eq!(app::result_line(&req, result, 3), "1000 g = 1.000 kg");
}

#[test]
fn volume_bridge_flag_overrides_config() {
    let req = request(
        &["unitswap", "volume", "1", "cup", "mL", "--bridge", "culinary"],
        &Config::default(),
    )
    .unwrap();
    match &req {
        ConversionRequest::Volume {
            policy, density, ..
        } => {
            assert_eq!(*policy, BridgePolicy::CulinaryUnits);
            assert!(density.is_none());
        }
        other => panic!("unexpected request {other:?}"),
    }
    assert_eq!(req.execute(), Err(ConversionError::MissingDensity));
}

#[test]
fn volume_uses_config_policy_and_substance() {
    let mut config = Config::default();
    config.conversion.bridge_policy = BridgePolicy::CulinaryUnits;
    let req = request(
        &["unitswap", "volume", "2", "tbsp", "tsp", "--substance", "milk"],
        &config,
    )
    .unwrap();
    let tsp = req.execute().unwrap();
    assert!((tsp - 6.0).abs() < 1e-3, "tsp={tsp}");
}

#[test]
fn volume_to_mass_defaults_to_configured_substance() {
    let mut config = Config::default();
    config.default_substance = "mercury".to_string();
    let req = request(&["unitswap", "volume-to-mass", "1", "mL", "g"], &config).unwrap();
    match &req {
        ConversionRequest::VolumeToMass { density, .. } => {
            assert_eq!(*density, DensityArg::new(13.6, "g/mL"));
        }
        other => panic!("unexpected request {other:?}"),
    }
    assert!((req.execute().unwrap() - 13.6).abs() < 1e-12);
}

#[test]
fn mass_to_volume_with_explicit_density() {
    let req = request(
        &[
            "unitswap",
            "mass-to-volume",
            "900",
            "g",
            "L",
            "--density",
            "900",
            "--density-unit",
            "kg/m3",
        ],
        &Config::default(),
    )
    .unwrap();
    let liters = req.execute().unwrap();
    assert!((liters - 1.0).abs() < 1e-12, "liters={liters}");
}

#[test]
fn unknown_substance_is_reported() {
    let err = request(
        &["unitswap", "volume-to-mass", "1", "L", "g", "--substance", "lava"],
        &Config::default(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::UnknownSubstance(name) if name == "lava"));
}

#[test]
fn concentration_passes_molecular_weight() {
    let req = request(
        &["unitswap", "concentration", "1", "M", "mg/mL", "--mw", "58.44"],
        &Config::default(),
    )
    .unwrap();
    let mg_ml = req.execute().unwrap();
    assert!((mg_ml - 58.44).abs() < 1e-9);

    let req = request(
        &["unitswap", "concentration", "1", "M", "mg/mL"],
        &Config::default(),
    )
    .unwrap();
    assert_eq!(req.execute(), Err(ConversionError::MissingMolecularWeight));
}

#[test]
fn negative_volume_is_parsed_then_rejected() {
    let req = request(&["unitswap", "volume", "-1", "L", "mL"], &Config::default()).unwrap();
    assert!(matches!(
        req.execute(),
        Err(ConversionError::InvalidMagnitude { .. })
    ));
}

#[test]
fn listing_commands_are_not_conversions() {
    let err = request(&["unitswap", "units", "mass"], &Config::default()).unwrap_err();
    assert!(matches!(err, AppError::UnknownDomain(_)));
}

#[test]
fn format_magnitude_normalizes_negative_zero() {
    assert_eq!(format_magnitude(1.0, 3), "1.000");
    assert_eq!(format_magnitude(-0.0000001, 3), "0.000");
    assert_eq!(format_magnitude(-1.26, 1), "-1.3");
    assert_eq!(format_magnitude(236.588, 0), "237");
}

#[test]
fn decimals_flag_does_not_leak_into_saved_config() {
    let cli = Cli::try_parse_from(["unitswap", "--decimals", "2", "mass", "1", "g", "mg"])
        .expect("cli parse");
    let overrides = Overrides {
        decimals: cli.decimals,
        lang: cli.lang,
    };
    let mut saved = Config::default();
    saved.conversion.bridge_policy = BridgePolicy::CulinaryUnits;

    let effective = overrides.apply(&saved);
    assert_eq!(effective.conversion.decimals(), 2);
    assert_eq!(effective.conversion.bridge_policy, BridgePolicy::CulinaryUnits);
    // 저장 대상 설정은 그대로 남는다.
    assert_eq!(saved.conversion.decimals, 6);

    let path = std::env::temp_dir().join(format!(
        "unitswap-overrides-{}.toml",
        std::process::id()
    ));
    saved.save_to(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert!(text.contains("decimals = 6"), "{text}");
}

#[test]
fn translator_follows_config_language_unless_flag_given() {
    let mut config = Config::default();
    config.language = "en".to_string();
    assert_eq!(app::translator_for(&config, None).language(), Language::En);
    assert_eq!(
        app::translator_for(&config, Some("ko")).language(),
        Language::Ko
    );

    // 설정 메뉴에서 언어를 바꾼 뒤 다시 만든 번역기는 새 언어를 쓴다.
    config.language = "ko".to_string();
    assert_eq!(app::translator_for(&config, None).language(), Language::Ko);
}
