use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::bridge::BridgePolicy;
use crate::cli::{Command, DensityOpts};
use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::i18n::{self, keys, Translator};
use crate::quantity::Domain;
use crate::request::{ConversionRequest, DensityArg};
use crate::substances::find_substance;
use crate::ui_cli::{self, MenuChoice};
use crate::units;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 프리셋에 없는 물질 이름
    #[error("알 수 없는 물질: {0}")]
    UnknownSubstance(String),
    /// 알 수 없는 도메인 이름
    #[error("알 수 없는 물리량: {0}")]
    UnknownDomain(String),
    /// 표준 입력이 닫힘(EOF)
    #[error("입력이 종료되었습니다.")]
    InputClosed,
}

/// 이번 실행에만 적용하는 명령줄 값. 설정 파일에는 저장하지 않는다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub decimals: Option<usize>,
    pub lang: Option<String>,
}

impl Overrides {
    /// 저장된 설정 위에 덮어쓰기 값을 얹은 사본을 만든다. 원본은 건드리지 않는다.
    pub fn apply(&self, config: &Config) -> Config {
        let mut effective = config.clone();
        if let Some(decimals) = self.decimals {
            effective.conversion.decimals = decimals;
        }
        effective
    }
}

/// 명령줄 언어 → 설정 언어 → 시스템 로케일 순으로 번역기를 만든다.
pub fn translator_for(config: &Config, lang_override: Option<&str>) -> Translator {
    let lang = i18n::resolve_language(lang_override.unwrap_or("auto"), Some(&config.language));
    Translator::new_with_pack(&lang, config.language_pack_dir.as_deref())
}

/// 명령을 실행한다. 하위 명령이 없으면 대화형 메뉴를 띄운다.
pub fn run(
    command: Option<Command>,
    config: &mut Config,
    overrides: &Overrides,
    tr: &mut Translator,
    config_path: &Path,
) -> Result<(), AppError> {
    match command.unwrap_or(Command::Interactive) {
        Command::Interactive => run_interactive(config, overrides, tr, config_path),
        Command::Units { domain } => {
            let domains = match domain {
                Some(name) => {
                    vec![Domain::from_name(&name).ok_or(AppError::UnknownDomain(name))?]
                }
                None => Domain::ALL.to_vec(),
            };
            for domain in domains {
                ui_cli::print_unit_table(tr, units::table(domain));
            }
            Ok(())
        }
        Command::Substances => {
            ui_cli::print_substances(tr);
            Ok(())
        }
        other => {
            let effective = overrides.apply(config);
            let request = request_for(&other, &effective)?;
            let result = request.execute()?;
            ui_cli::print_result(tr, &request, result, effective.conversion.decimals());
            Ok(())
        }
    }
}

/// 변환 하위 명령을 요청 값 객체로 바꾼다. 변환 명령이 아니면 `UnknownDomain`.
pub fn request_for(command: &Command, config: &Config) -> Result<ConversionRequest, AppError> {
    let request = match command {
        Command::Volume {
            value,
            from,
            to,
            density,
            bridge,
        } => {
            let policy = bridge
                .map(BridgePolicy::from)
                .unwrap_or(config.conversion.bridge_policy);
            ConversionRequest::Volume {
                value: *value,
                from: from.clone(),
                to: to.clone(),
                density: optional_density(density)?,
                policy,
            }
        }
        Command::Mass { value, from, to } => ConversionRequest::Scalar {
            domain: Domain::Mass,
            value: *value,
            from: from.clone(),
            to: to.clone(),
        },
        Command::Density { value, from, to } => ConversionRequest::Scalar {
            domain: Domain::Density,
            value: *value,
            from: from.clone(),
            to: to.clone(),
        },
        Command::Concentration {
            value,
            from,
            to,
            mw,
        } => ConversionRequest::Concentration {
            value: *value,
            from: from.clone(),
            to: to.clone(),
            molecular_weight: *mw,
        },
        Command::VolumeToMass {
            value,
            volume_unit,
            mass_unit,
            density,
        } => ConversionRequest::VolumeToMass {
            value: *value,
            volume_unit: volume_unit.clone(),
            density: required_density(density, config)?,
            mass_unit: mass_unit.clone(),
        },
        Command::MassToVolume {
            value,
            mass_unit,
            volume_unit,
            density,
        } => ConversionRequest::MassToVolume {
            value: *value,
            mass_unit: mass_unit.clone(),
            density: required_density(density, config)?,
            volume_unit: volume_unit.clone(),
        },
        Command::Units { .. } | Command::Substances | Command::Interactive => {
            return Err(AppError::UnknownDomain(format!("{command:?}")));
        }
    };
    Ok(request)
}

/// 물질 이름을 밀도 입력으로 바꾼다.
pub fn substance_density(name: &str) -> Result<DensityArg, AppError> {
    let substance =
        find_substance(name).ok_or_else(|| AppError::UnknownSubstance(name.trim().to_string()))?;
    Ok(DensityArg::new(substance.density_g_per_ml, "g/mL"))
}

fn optional_density(opts: &DensityOpts) -> Result<Option<DensityArg>, AppError> {
    if let Some(name) = &opts.substance {
        return substance_density(name).map(Some);
    }
    Ok(opts
        .density
        .map(|value| DensityArg::new(value, opts.density_unit.clone())))
}

/// 밀도가 반드시 필요한 명령. 아무것도 주지 않으면 설정의 기본 물질을 쓴다.
fn required_density(opts: &DensityOpts, config: &Config) -> Result<DensityArg, AppError> {
    match optional_density(opts)? {
        Some(density) => Ok(density),
        None => substance_density(&config.default_substance),
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
/// 설정 메뉴는 저장된 설정만 고치고, 명령줄 덮어쓰기는 매 반복마다 다시 얹는다.
pub fn run_interactive(
    config: &mut Config,
    overrides: &Overrides,
    tr: &mut Translator,
    config_path: &Path,
) -> Result<(), AppError> {
    loop {
        let effective = overrides.apply(config);
        let choice = match ui_cli::main_menu(tr) {
            Ok(choice) => choice,
            Err(AppError::InputClosed) => MenuChoice::Exit,
            Err(err) => return Err(err),
        };
        let outcome = match choice {
            MenuChoice::Volume => ui_cli::handle_volume(tr, &effective),
            MenuChoice::Mass => ui_cli::handle_scalar(tr, &effective, Domain::Mass),
            MenuChoice::Density => ui_cli::handle_scalar(tr, &effective, Domain::Density),
            MenuChoice::Concentration => ui_cli::handle_concentration(tr, &effective),
            MenuChoice::VolumeMass => ui_cli::handle_volume_mass(tr, &effective),
            MenuChoice::Units => {
                for domain in Domain::ALL {
                    ui_cli::print_unit_table(tr, units::table(domain));
                }
                ui_cli::print_substances(tr);
                Ok(())
            }
            MenuChoice::Settings => {
                let previous_language = config.language.clone();
                match ui_cli::handle_settings(tr, config) {
                    Ok(true) => {
                        config.save_to(config_path)?;
                        info!(path = %config_path.display(), "settings saved");
                        if config.language != previous_language {
                            *tr = translator_for(config, None);
                        }
                        println!("{}", tr.t(keys::SETTINGS_SAVED));
                        Ok(())
                    }
                    other => other.map(|_| ()),
                }
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            Err(AppError::InputClosed) => {
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
            Err(err @ (AppError::Io(_) | AppError::Config(_))) => return Err(err),
            Err(err) => ui_cli::print_error(tr, &err),
        }
    }
    Ok(())
}

/// 변환 결과를 `1 L = 1000.000000 mL` 형태의 한 줄로 만든다.
pub fn result_line(request: &ConversionRequest, result: f64, decimals: usize) -> String {
    format!(
        "{} {} = {} {}",
        request.value(),
        request.source_unit().trim(),
        conversion::format_magnitude(result, decimals),
        request.target_unit().trim()
    )
}
