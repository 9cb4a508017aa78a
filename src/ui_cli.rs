use std::io::{self, Write};

use crate::app::{self, AppError};
use crate::bridge::BridgePolicy;
use crate::config::{Config, MAX_DECIMALS};
use crate::i18n::{keys, Translator};
use crate::quantity::Domain;
use crate::request::{ConversionRequest, DensityArg};
use crate::substances::substances;
use crate::units::{self, Unit, UnitTable, VolumeUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Volume,
    Mass,
    Density,
    Concentration,
    VolumeMass,
    Units,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_VOLUME,
        keys::MAIN_MENU_MASS,
        keys::MAIN_MENU_DENSITY,
        keys::MAIN_MENU_CONCENTRATION,
        keys::MAIN_MENU_VOLUME_MASS,
        keys::MAIN_MENU_UNITS,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match map_menu(sel.trim()) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn map_menu(sel: &str) -> Option<MenuChoice> {
    match sel {
        "1" => Some(MenuChoice::Volume),
        "2" => Some(MenuChoice::Mass),
        "3" => Some(MenuChoice::Density),
        "4" => Some(MenuChoice::Concentration),
        "5" => Some(MenuChoice::VolumeMass),
        "6" => Some(MenuChoice::Units),
        "7" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 질량/밀도처럼 보조 입력이 없는 테이블 변환 메뉴를 처리한다.
pub fn handle_scalar(tr: &Translator, cfg: &Config, domain: Domain) -> Result<(), AppError> {
    let heading = match domain {
        Domain::Volume => keys::HEADING_VOLUME,
        Domain::Mass => keys::HEADING_MASS,
        Domain::Density => keys::HEADING_DENSITY,
        Domain::Concentration => keys::HEADING_CONCENTRATION,
    };
    println!("{}", tr.t(heading));
    print_available_units(tr, domain);
    println!("{}", tr.t(keys::HELP_CONVERSION));
    let value = read_f64(tr, &tr.t(keys::PROMPT_VALUE))?;
    let from = read_unit(tr, keys::PROMPT_FROM_UNIT, cfg, domain)?;
    let to = read_unit(tr, keys::PROMPT_TO_UNIT, cfg, domain)?;
    let request = ConversionRequest::Scalar {
        domain,
        value,
        from,
        to,
    };
    run_request(tr, cfg, &request)
}

/// 체적 변환 메뉴. 브리지 정책이 켜져 있고 계량 단위가 끼면 밀도를 묻는다.
pub fn handle_volume(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HEADING_VOLUME));
    print_available_units(tr, Domain::Volume);
    println!("{}", tr.t(keys::HELP_CONVERSION));
    let policy = cfg.conversion.bridge_policy;
    if policy == BridgePolicy::CulinaryUnits {
        println!("{}", tr.t(keys::NOTE_CULINARY_BRIDGE));
    }
    let value = read_f64(tr, &tr.t(keys::PROMPT_VALUE))?;
    let from = read_unit(tr, keys::PROMPT_FROM_UNIT, cfg, Domain::Volume)?;
    let to = read_unit(tr, keys::PROMPT_TO_UNIT, cfg, Domain::Volume)?;
    let needs_density = match (VolumeUnit::parse(&from), VolumeUnit::parse(&to)) {
        (Some(f), Some(t)) => policy.requires_bridge(f, t),
        _ => false,
    };
    let density = if needs_density {
        Some(read_density(tr, cfg)?)
    } else {
        None
    };
    let request = ConversionRequest::Volume {
        value,
        from,
        to,
        density,
        policy,
    };
    run_request(tr, cfg, &request)
}

/// 농도 변환 메뉴. 몰 단위가 끼면 분자량을 묻는다.
pub fn handle_concentration(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HEADING_CONCENTRATION));
    print_available_units(tr, Domain::Concentration);
    println!("{}", tr.t(keys::HELP_CONVERSION));
    println!("{}", tr.t(keys::NOTE_MOLAR));
    let value = read_f64(tr, &tr.t(keys::PROMPT_VALUE))?;
    let from = read_unit(tr, keys::PROMPT_FROM_UNIT, cfg, Domain::Concentration)?;
    let to = read_unit(tr, keys::PROMPT_TO_UNIT, cfg, Domain::Concentration)?;
    let is_molar = |s: &str| units::ConcentrationUnit::parse(s).is_some_and(|u| u.is_molar());
    let molecular_weight = if is_molar(&from) || is_molar(&to) {
        Some(read_f64(tr, &tr.t(keys::PROMPT_MOLECULAR_WEIGHT))?)
    } else {
        None
    };
    let request = ConversionRequest::Concentration {
        value,
        from,
        to,
        molecular_weight,
    };
    run_request(tr, cfg, &request)
}

/// 체적 ↔ 질량 메뉴를 처리한다.
pub fn handle_volume_mass(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HEADING_VOLUME_MASS));
    println!("{}", tr.t(keys::VOLUME_MASS_DIRECTION));
    let to_mass = loop {
        match read_line(&tr.t(keys::PROMPT_SELECT))?.trim() {
            "1" => break true,
            "2" => break false,
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };
    let (from_domain, to_domain) = if to_mass {
        (Domain::Volume, Domain::Mass)
    } else {
        (Domain::Mass, Domain::Volume)
    };
    print_available_units(tr, from_domain);
    let value = read_f64(tr, &tr.t(keys::PROMPT_VALUE))?;
    let from = read_unit(tr, keys::PROMPT_FROM_UNIT, cfg, from_domain)?;
    print_available_units(tr, to_domain);
    let to = read_unit(tr, keys::PROMPT_TO_UNIT, cfg, to_domain)?;
    let density = read_density(tr, cfg)?;
    let request = if to_mass {
        ConversionRequest::VolumeToMass {
            value,
            volume_unit: from,
            density,
            mass_unit: to,
        }
    } else {
        ConversionRequest::MassToVolume {
            value,
            mass_unit: from,
            density,
            volume_unit: to,
        }
    };
    run_request(tr, cfg, &request)
}

/// 설정 메뉴를 처리한다. 값이 바뀌었으면 `true`.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} decimals={}, bridge_policy={:?}, language={}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.conversion.decimals(),
        cfg.conversion.bridge_policy,
        cfg.language
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => Ok(false),
        "1" => {
            let input = read_line(&tr.t(keys::SETTINGS_PROMPT_DECIMALS))?;
            match input.trim().parse::<usize>() {
                Ok(n) if n <= MAX_DECIMALS => {
                    cfg.conversion.decimals = n;
                    Ok(true)
                }
                _ => invalid_setting(tr),
            }
        }
        "2" => {
            let input = read_line(&tr.t(keys::SETTINGS_PROMPT_POLICY))?;
            cfg.conversion.bridge_policy = match input.trim() {
                "1" => BridgePolicy::Never,
                "2" => BridgePolicy::CulinaryUnits,
                _ => return invalid_setting(tr),
            };
            Ok(true)
        }
        "3" => {
            let input = read_line(&tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            match input.trim().to_lowercase().as_str() {
                code @ ("auto" | "ko" | "en") => {
                    cfg.language = code.to_string();
                    Ok(true)
                }
                _ => invalid_setting(tr),
            }
        }
        _ => invalid_setting(tr),
    }
}

fn invalid_setting(tr: &Translator) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_INVALID));
    Ok(false)
}

/// 단위 테이블을 출력한다.
pub fn print_unit_table(tr: &Translator, table: &UnitTable) {
    println!("{} [{}]", tr.t(keys::UNITS_HEADING), table.domain());
    for entry in table.entries() {
        let mut line = match entry.factor {
            Some(factor) => format!("  {:<8} {factor}", entry.symbol),
            None => format!("  {:<8} -", entry.symbol),
        };
        if entry.is_base {
            line.push(' ');
            line.push_str(&tr.t(keys::UNITS_BASE_MARK));
        }
        if entry.density_bridge {
            line.push(' ');
            line.push_str(&tr.t(keys::UNITS_BRIDGE_MARK));
        }
        if entry.molar_scale.is_some() {
            line.push(' ');
            line.push_str(&tr.t(keys::UNITS_MOLAR_MARK));
        }
        println!("{line}");
    }
}

/// 물질 밀도 프리셋을 출력한다.
pub fn print_substances(tr: &Translator) {
    println!("{}", tr.t(keys::SUBSTANCES_HEADING));
    for s in substances() {
        println!("  {:<10} {:<14} {} g/mL", s.key, s.name, s.density_g_per_ml);
    }
}

/// 변환 결과 한 줄을 출력한다.
pub fn print_result(tr: &Translator, request: &ConversionRequest, result: f64, decimals: usize) {
    println!(
        "{} {}",
        tr.t(keys::RESULT),
        app::result_line(request, result, decimals)
    );
}

/// 오류를 접두어와 함께 표준 오류로 출력한다.
pub fn print_error(tr: &Translator, err: &dyn std::error::Error) {
    eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
}

fn run_request(tr: &Translator, cfg: &Config, request: &ConversionRequest) -> Result<(), AppError> {
    let result = request.execute()?;
    print_result(tr, request, result, cfg.conversion.decimals());
    Ok(())
}

fn print_available_units(tr: &Translator, domain: Domain) {
    let symbols: Vec<_> = units::table(domain).symbols().collect();
    println!("{} {}", tr.t(keys::AVAILABLE_UNITS), symbols.join(", "));
}

/// 밀도 입력을 받는다. 숫자면 단위를 추가로 묻고, 이름이면 물질 프리셋을 찾는다.
fn read_density(tr: &Translator, cfg: &Config) -> Result<DensityArg, AppError> {
    let input = read_line(&tr.t(keys::PROMPT_DENSITY))?;
    let input = input.trim();
    if input.is_empty() {
        return app::substance_density(&cfg.default_substance);
    }
    match input.parse::<f64>() {
        Ok(value) => {
            let unit = read_line(&tr.t(keys::PROMPT_DENSITY_UNIT))?;
            let unit = match unit.trim() {
                "" => "g/mL",
                other => other,
            };
            Ok(DensityArg::new(value, unit))
        }
        Err(_) => app::substance_density(input),
    }
}

/// 단위를 입력받는다. 비워 두면 설정의 기본 단위.
fn read_unit(tr: &Translator, key: &str, cfg: &Config, domain: Domain) -> Result<String, AppError> {
    let default = cfg.default_units.symbol(domain);
    let input = read_line(&format!("{}[{default}] ", tr.t(key)))?;
    Ok(fallback_unit(&input, default))
}

fn fallback_unit(input: &str, default: &str) -> String {
    match input.trim() {
        "" => default.to_string(),
        unit => unit.to_string(),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
