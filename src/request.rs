//! 호출 한 번에 해당하는 변환 요청 값 객체.

use tracing::warn;

use crate::bridge::{self, BridgePolicy};
use crate::conversion::{self, parse_unit, ConversionError};
use crate::quantity::Domain;
use crate::units::{Density, DensityUnit, VolumeUnit};

/// 변환 결과. 성공 값과 실패 종류를 명시적으로 구분한다.
pub type ConversionResult = Result<f64, ConversionError>;

/// 밀도 보조 입력(값 + 단위 문자열).
#[derive(Debug, Clone, PartialEq)]
pub struct DensityArg {
    pub value: f64,
    pub unit: String,
}

impl DensityArg {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    fn resolve(&self) -> Result<Density, ConversionError> {
        let unit: DensityUnit = parse_unit(&self.unit)?;
        Ok(Density::new(self.value, unit))
    }
}

/// 변환 요청. 연산 종류마다 필요한 보조 입력이 다르다.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionRequest {
    /// 테이블 변환(체적, 질량, 밀도, 몰 단위를 뺀 농도)
    Scalar {
        domain: Domain,
        value: f64,
        from: String,
        to: String,
    },
    /// 계량 단위 정책을 적용하는 체적 변환
    Volume {
        value: f64,
        from: String,
        to: String,
        density: Option<DensityArg>,
        policy: BridgePolicy,
    },
    /// 농도 변환(몰 단위면 분자량 필요)
    Concentration {
        value: f64,
        from: String,
        to: String,
        molecular_weight: Option<f64>,
    },
    VolumeToMass {
        value: f64,
        volume_unit: String,
        density: DensityArg,
        mass_unit: String,
    },
    MassToVolume {
        value: f64,
        mass_unit: String,
        density: DensityArg,
        volume_unit: String,
    },
}

impl ConversionRequest {
    pub fn value(&self) -> f64 {
        match self {
            ConversionRequest::Scalar { value, .. }
            | ConversionRequest::Volume { value, .. }
            | ConversionRequest::Concentration { value, .. }
            | ConversionRequest::VolumeToMass { value, .. }
            | ConversionRequest::MassToVolume { value, .. } => *value,
        }
    }

    pub fn source_unit(&self) -> &str {
        match self {
            ConversionRequest::Scalar { from, .. }
            | ConversionRequest::Volume { from, .. }
            | ConversionRequest::Concentration { from, .. } => from,
            ConversionRequest::VolumeToMass { volume_unit, .. } => volume_unit,
            ConversionRequest::MassToVolume { mass_unit, .. } => mass_unit,
        }
    }

    pub fn target_unit(&self) -> &str {
        match self {
            ConversionRequest::Scalar { to, .. }
            | ConversionRequest::Volume { to, .. }
            | ConversionRequest::Concentration { to, .. } => to,
            ConversionRequest::VolumeToMass { mass_unit, .. } => mass_unit,
            ConversionRequest::MassToVolume { volume_unit, .. } => volume_unit,
        }
    }

    /// 요청을 실행한다. 실패는 로그를 남긴 뒤 그대로 호출자에게 돌려준다.
    pub fn execute(&self) -> ConversionResult {
        let result = self.dispatch();
        if let Err(err) = &result {
            warn!(request = ?self, %err, "conversion rejected");
        }
        result
    }

    fn dispatch(&self) -> ConversionResult {
        match self {
            ConversionRequest::Scalar {
                domain,
                value,
                from,
                to,
            } => conversion::convert(*domain, *value, from, to),
            ConversionRequest::Volume {
                value,
                from,
                to,
                density,
                policy,
            } => {
                let from: VolumeUnit = parse_unit(from)?;
                let to: VolumeUnit = parse_unit(to)?;
                let density = density.as_ref().map(DensityArg::resolve).transpose()?;
                bridge::convert_volume_with_policy(*value, from, to, density, *policy)
            }
            ConversionRequest::Concentration {
                value,
                from,
                to,
                molecular_weight,
            } => conversion::convert_concentration(*value, from, to, *molecular_weight),
            ConversionRequest::VolumeToMass {
                value,
                volume_unit,
                density,
                mass_unit,
            } => conversion::volume_to_mass(
                *value,
                volume_unit,
                density.value,
                &density.unit,
                mass_unit,
            ),
            ConversionRequest::MassToVolume {
                value,
                mass_unit,
                density,
                volume_unit,
            } => conversion::mass_to_volume(
                *value,
                mass_unit,
                density.value,
                &density.unit,
                volume_unit,
            ),
        }
    }
}
