//! 단위 테이블 회귀 테스트. 항등/왕복/추이 법칙과 대표 환산값을 확인한다.
use unitswap::conversion::{convert, convert_concentration, ConversionError};
use unitswap::quantity::Domain;
use unitswap::units::{self, convert_density, convert_mass, DensityUnit, MassUnit, Unit, VolumeUnit};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

/// 몰 단위처럼 고정 계수가 없는 행은 테이블 변환 대상이 아니다.
fn fixed_symbols(domain: Domain) -> Vec<&'static str> {
    units::table(domain)
        .entries()
        .iter()
        .filter(|e| e.factor.is_some())
        .map(|e| e.symbol)
        .collect()
}

#[test]
fn every_table_is_consistent() {
    for domain in Domain::ALL {
        let table = units::table(domain);
        assert!(table.is_consistent(), "{domain} table inconsistent");
        assert_eq!(table.base().map(|e| e.factor), Some(Some(1.0)), "{domain}");
    }
}

#[test]
fn identity_returns_value_unchanged() {
    for domain in Domain::ALL {
        for symbol in fixed_symbols(domain) {
            let out = convert(domain, 12.345, symbol, symbol).unwrap();
            assert_eq!(out, 12.345, "{domain} {symbol}");
        }
    }
}

#[test]
fn round_trip_is_invertible() {
    for domain in Domain::ALL {
        let symbols = fixed_symbols(domain);
        for a in &symbols {
            for b in &symbols {
                let there = convert(domain, 3.5, a, b).unwrap();
                let back = convert(domain, there, b, a).unwrap();
                assert_close(&format!("{domain} {a}->{b}->{a}"), back, 3.5, 1e-9);
            }
        }
    }
}

#[test]
fn chained_conversion_is_transitive() {
    for domain in Domain::ALL {
        let symbols = fixed_symbols(domain);
        for a in &symbols {
            for b in &symbols {
                for c in &symbols {
                    let direct = convert(domain, 2.5, a, c).unwrap();
                    let via = convert(domain, convert(domain, 2.5, a, b).unwrap(), b, c).unwrap();
                    assert_close(&format!("{domain} {a}->{b}->{c}"), via, direct, 1e-9);
                }
            }
        }
    }
}

#[test]
fn typed_helpers_agree_with_string_tables() {
    for &from in MassUnit::ALL {
        for &to in MassUnit::ALL {
            let typed = convert_mass(4.2, from, to);
            let table = convert(Domain::Mass, 4.2, from.symbol(), to.symbol()).unwrap();
            assert_close(&format!("{}->{}", from.symbol(), to.symbol()), typed, table, 1e-12);
        }
    }
    for &from in DensityUnit::ALL {
        for &to in DensityUnit::ALL {
            let typed = convert_density(0.8, from, to);
            let table = convert(Domain::Density, 0.8, from.symbol(), to.symbol()).unwrap();
            assert_close(&format!("{}->{}", from.symbol(), to.symbol()), typed, table, 1e-12);
        }
    }
}

#[test]
fn overflowing_result_is_rejected() {
    assert!(matches!(
        convert(Domain::Volume, 1e306, "gallon", "drop"),
        Err(ConversionError::InvalidMagnitude { .. })
    ));
    assert!(matches!(
        convert(Domain::Mass, 1e300, "kg", "µg"),
        Err(ConversionError::InvalidMagnitude { .. })
    ));
    assert!(matches!(
        convert_concentration(1e300, "kg/mL", "ppb", None),
        Err(ConversionError::InvalidMagnitude { .. })
    ));
}

#[test]
fn representative_volume_values() {
    assert_close("L->mL", convert(Domain::Volume, 1.0, "L", "mL").unwrap(), 1000.0, 1e-12);
    assert_close("cup->mL", convert(Domain::Volume, 1.0, "cup", "mL").unwrap(), 236.588, 1e-9);
    assert_close("tbsp->tsp", convert(Domain::Volume, 1.0, "tbsp", "tsp").unwrap(), 3.0, 1e-4);
    assert_close("µL->mL", convert(Domain::Volume, 500.0, "µL", "mL").unwrap(), 0.5, 1e-12);
}

#[test]
fn representative_mass_values() {
    assert_close("g->kg", convert(Domain::Mass, 1000.0, "g", "kg").unwrap(), 1.0, 1e-12);
    assert_close("lb->g", convert(Domain::Mass, 1.0, "lb", "g").unwrap(), 453.59237, 1e-9);
    assert_close("oz->g", convert(Domain::Mass, 1.0, "oz", "g").unwrap(), 28.349523125, 1e-9);
    assert_close("mg->µg", convert(Domain::Mass, 1.0, "mg", "ug").unwrap(), 1000.0, 1e-12);
}

#[test]
fn representative_density_values() {
    assert_close(
        "g/mL->kg/m³",
        convert(Domain::Density, 1.0, "g/mL", "kg/m³").unwrap(),
        1000.0,
        1e-9,
    );
    assert_close(
        "g/cm3 alias",
        convert(Domain::Density, 0.9, "g/cm3", "kg/L").unwrap(),
        0.9,
        1e-12,
    );
}

#[test]
fn negative_density_is_a_plain_number() {
    let out = convert(Domain::Density, -2.0, "g/mL", "g/L").unwrap();
    assert_close("negative density", out, -2000.0, 1e-12);
}

#[test]
fn unknown_unit_names_domain_and_unit() {
    let err = convert(Domain::Volume, 1.0, "barrel", "mL").unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnknownUnit {
            domain: Domain::Volume,
            unit: "barrel".to_string()
        }
    );
    // 질량 단위를 체적 테이블에서 찾지 않는다.
    assert!(matches!(
        convert(Domain::Volume, 1.0, "mL", "kg"),
        Err(ConversionError::UnknownUnit { .. })
    ));
}

#[test]
fn negative_or_nan_volume_is_rejected() {
    assert!(matches!(
        convert(Domain::Volume, -1.0, "L", "mL"),
        Err(ConversionError::InvalidMagnitude { .. })
    ));
    assert!(matches!(
        convert(Domain::Mass, f64::NAN, "g", "kg"),
        Err(ConversionError::InvalidMagnitude { .. })
    ));
    assert!(matches!(
        convert(Domain::Density, f64::INFINITY, "g/mL", "g/L"),
        Err(ConversionError::InvalidMagnitude { .. })
    ));
}

#[test]
fn aliases_and_case_insensitive_lookup() {
    assert_eq!(VolumeUnit::parse("uL"), Some(VolumeUnit::Microliter));
    assert_eq!(VolumeUnit::parse("ml"), Some(VolumeUnit::Milliliter));
    assert_eq!(VolumeUnit::parse(" fl oz "), Some(VolumeUnit::FluidOunce));
    assert_eq!(VolumeUnit::parse("Cup"), Some(VolumeUnit::Cup));
    assert_eq!(MassUnit::parse("mcg"), Some(MassUnit::Microgram));
    assert_eq!(MassUnit::parse("KG"), Some(MassUnit::Kilogram));
    assert_eq!(VolumeUnit::parse("parsec"), None);
}

#[test]
fn molar_symbols_are_case_sensitive() {
    use unitswap::units::ConcentrationUnit;
    assert_eq!(ConcentrationUnit::parse("M"), Some(ConcentrationUnit::Molar));
    assert_eq!(ConcentrationUnit::parse("mM"), Some(ConcentrationUnit::Millimolar));
    assert_eq!(ConcentrationUnit::parse("mol/L"), Some(ConcentrationUnit::Molar));
}

#[test]
fn table_listing_marks_bridge_and_molar_units() {
    let volume = units::table(Domain::Volume);
    let bridged: Vec<_> = volume
        .entries()
        .iter()
        .filter(|e| e.density_bridge)
        .map(|e| e.symbol)
        .collect();
    assert_eq!(bridged, vec!["fl oz", "cup", "tsp", "tbsp"]);

    let conc = units::table(Domain::Concentration);
    let molar: Vec<_> = conc
        .entries()
        .iter()
        .filter(|e| e.molar_scale.is_some())
        .map(|e| e.symbol)
        .collect();
    assert_eq!(molar, vec!["M", "mM"]);
}
