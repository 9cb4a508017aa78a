use serde::{Deserialize, Serialize};

use super::Unit;
use crate::conversion::ConversionError;
use crate::quantity::Domain;

/// 밀도 단위. 내부 기준은 g/mL이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DensityUnit {
    GramPerMilliliter,
    GramPerCubicCentimeter,
    KilogramPerLiter,
    KilogramPerCubicMeter,
    GramPerLiter,
    PoundPerCubicFoot,
    PoundPerGallon,
}

impl DensityUnit {
    /// 1 단위가 몇 g/mL 인지.
    pub const fn factor(self) -> f64 {
        match self {
            DensityUnit::GramPerMilliliter => 1.0,
            DensityUnit::GramPerCubicCentimeter => 1.0,
            DensityUnit::KilogramPerLiter => 1.0,
            DensityUnit::KilogramPerCubicMeter => 0.001,
            DensityUnit::GramPerLiter => 0.001,
            DensityUnit::PoundPerCubicFoot => 0.0160185,
            DensityUnit::PoundPerGallon => 0.119826,
        }
    }
}

impl Unit for DensityUnit {
    const DOMAIN: Domain = Domain::Density;
    const BASE: Self = DensityUnit::GramPerMilliliter;
    const ALL: &'static [Self] = &[
        DensityUnit::GramPerMilliliter,
        DensityUnit::GramPerCubicCentimeter,
        DensityUnit::KilogramPerLiter,
        DensityUnit::KilogramPerCubicMeter,
        DensityUnit::GramPerLiter,
        DensityUnit::PoundPerCubicFoot,
        DensityUnit::PoundPerGallon,
    ];

    fn symbol(self) -> &'static str {
        match self {
            DensityUnit::GramPerMilliliter => "g/mL",
            DensityUnit::GramPerCubicCentimeter => "g/cm³",
            DensityUnit::KilogramPerLiter => "kg/L",
            DensityUnit::KilogramPerCubicMeter => "kg/m³",
            DensityUnit::GramPerLiter => "g/L",
            DensityUnit::PoundPerCubicFoot => "lb/ft³",
            DensityUnit::PoundPerGallon => "lb/gal",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            DensityUnit::GramPerCubicCentimeter => &["g/cm3", "g/cc"],
            DensityUnit::KilogramPerCubicMeter => &["kg/m3"],
            DensityUnit::PoundPerCubicFoot => &["lb/ft3"],
            _ => &[],
        }
    }
}

/// 주어진 밀도를 g/mL로 변환한다.
pub fn to_gram_per_ml(value: f64, unit: DensityUnit) -> f64 {
    value * unit.factor()
}

/// g/mL 값을 원하는 단위로 변환한다.
pub fn from_gram_per_ml(value_g_ml: f64, unit: DensityUnit) -> f64 {
    value_g_ml / unit.factor()
}

/// 밀도를 변환한다.
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    if from == to {
        return value;
    }
    from_gram_per_ml(to_gram_per_ml(value, from), to)
}

/// 밀도 값과 단위를 함께 묶은 값 객체. 체적↔질량 브리지의 보조 입력이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Density {
    pub value: f64,
    pub unit: DensityUnit,
}

impl Density {
    pub const fn new(value: f64, unit: DensityUnit) -> Self {
        Self { value, unit }
    }

    pub const fn grams_per_ml(value: f64) -> Self {
        Self::new(value, DensityUnit::GramPerMilliliter)
    }

    /// g/mL 로 환산한 값을 돌려준다. 0 이하이거나 유한하지 않으면 오류.
    pub fn to_grams_per_ml(&self) -> Result<f64, ConversionError> {
        if !self.value.is_finite() || self.value <= 0.0 {
            return Err(ConversionError::InvalidDensity(self.value));
        }
        Ok(to_gram_per_ml(self.value, self.unit))
    }
}
