use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::bridge::BridgePolicy;
use crate::quantity::Domain;
use crate::units::{ConcentrationUnit, DensityUnit, MassUnit, Unit, VolumeUnit};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 결과 표시 자릿수 상한.
pub const MAX_DECIMALS: usize = 12;

/// 각 도메인별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub volume: VolumeUnit,
    pub mass: MassUnit,
    pub density: DensityUnit,
    pub concentration: ConcentrationUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            volume: VolumeUnit::Milliliter,
            mass: MassUnit::Gram,
            density: DensityUnit::GramPerMilliliter,
            concentration: ConcentrationUnit::MicrogramPerMilliliter,
        }
    }
}

impl DefaultUnits {
    /// 도메인의 기본 단위 표기. 대화형 입력에서 단위를 비워 두면 이 값을 쓴다.
    pub fn symbol(&self, domain: Domain) -> &'static str {
        match domain {
            Domain::Volume => self.volume.symbol(),
            Domain::Mass => self.mass.symbol(),
            Domain::Density => self.density.symbol(),
            Domain::Concentration => self.concentration.symbol(),
        }
    }
}

/// 변환 동작 관련 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    /// 결과 소수 자릿수
    pub decimals: usize,
    /// 계량 단위 밀도 브리지 정책
    pub bridge_policy: BridgePolicy,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            decimals: 6,
            bridge_policy: BridgePolicy::Never,
        }
    }
}

impl ConversionSettings {
    /// 상한을 넘는 자릿수는 잘라서 돌려준다.
    pub fn decimals(&self) -> usize {
        self.decimals.min(MAX_DECIMALS)
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 표시 언어 (`auto`, `ko`, `en` ...)
    pub language: String,
    /// TOML 언어팩 디렉터리
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_pack_dir: Option<String>,
    /// 밀도 입력을 생략했을 때 쓸 물질 프리셋
    pub default_substance: String,
    pub conversion: ConversionSettings,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            default_substance: "water".to_string(),
            conversion: ConversionSettings::default(),
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정한 경로(기본 `config.toml`)의 설정을 로드한다. 파일이 없으면 기본 설정을 만들어 저장한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}
