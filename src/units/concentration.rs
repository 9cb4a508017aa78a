use serde::{Deserialize, Serialize};

use super::Unit;
use crate::conversion::ConversionError;
use crate::quantity::Domain;

/// 농도 단위. 질량 농도 계열의 내부 기준은 µg/mL 이고,
/// ppm/ppb/% 는 같은 수치 공간에 얹혀 있다(ppm ≡ mg/L).
/// M, mM 은 분자량이 있어야 질량 농도와 오갈 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcentrationUnit {
    MicrogramPerMilliliter,
    MilligramPerMilliliter,
    GramPerMilliliter,
    KilogramPerMilliliter,
    MicrogramPerLiter,
    MilligramPerLiter,
    GramPerLiter,
    KilogramPerLiter,
    Ppm,
    Ppb,
    Percent,
    Molar,
    Millimolar,
}

/// 농도 단위가 µg/mL 공간과 연결되는 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConcentrationScale {
    /// 1 단위가 몇 µg/mL 인지 나타내는 고정 계수.
    Fixed(f64),
    /// 몰 농도 1 단위 × 분자량(g/mol) 1 이 몇 µg/mL 인지.
    /// 1 M = 1 mol/L → MW g/L = MW × 1000 µg/mL.
    Molar(f64),
}

impl ConcentrationUnit {
    pub const fn scale(self) -> ConcentrationScale {
        match self {
            ConcentrationUnit::MicrogramPerMilliliter => ConcentrationScale::Fixed(1.0),
            ConcentrationUnit::MilligramPerMilliliter => ConcentrationScale::Fixed(1000.0),
            ConcentrationUnit::GramPerMilliliter => ConcentrationScale::Fixed(1e6),
            ConcentrationUnit::KilogramPerMilliliter => ConcentrationScale::Fixed(1e9),
            ConcentrationUnit::MicrogramPerLiter => ConcentrationScale::Fixed(0.001),
            ConcentrationUnit::MilligramPerLiter => ConcentrationScale::Fixed(1.0),
            ConcentrationUnit::GramPerLiter => ConcentrationScale::Fixed(1000.0),
            ConcentrationUnit::KilogramPerLiter => ConcentrationScale::Fixed(1e6),
            ConcentrationUnit::Ppm => ConcentrationScale::Fixed(1.0),
            ConcentrationUnit::Ppb => ConcentrationScale::Fixed(0.001),
            ConcentrationUnit::Percent => ConcentrationScale::Fixed(10_000.0),
            ConcentrationUnit::Molar => ConcentrationScale::Molar(1000.0),
            ConcentrationUnit::Millimolar => ConcentrationScale::Molar(1.0),
        }
    }

    /// µg/mL 기준 고정 계수. 몰 농도는 `None`.
    pub const fn factor(self) -> Option<f64> {
        match self.scale() {
            ConcentrationScale::Fixed(f) => Some(f),
            ConcentrationScale::Molar(_) => None,
        }
    }

    pub const fn molar_scale(self) -> Option<f64> {
        match self.scale() {
            ConcentrationScale::Fixed(_) => None,
            ConcentrationScale::Molar(s) => Some(s),
        }
    }

    pub const fn is_molar(self) -> bool {
        matches!(self.scale(), ConcentrationScale::Molar(_))
    }
}

impl Unit for ConcentrationUnit {
    const DOMAIN: Domain = Domain::Concentration;
    const BASE: Self = ConcentrationUnit::MicrogramPerMilliliter;
    const ALL: &'static [Self] = &[
        ConcentrationUnit::MicrogramPerMilliliter,
        ConcentrationUnit::MilligramPerMilliliter,
        ConcentrationUnit::GramPerMilliliter,
        ConcentrationUnit::KilogramPerMilliliter,
        ConcentrationUnit::MicrogramPerLiter,
        ConcentrationUnit::MilligramPerLiter,
        ConcentrationUnit::GramPerLiter,
        ConcentrationUnit::KilogramPerLiter,
        ConcentrationUnit::Ppm,
        ConcentrationUnit::Ppb,
        ConcentrationUnit::Percent,
        ConcentrationUnit::Molar,
        ConcentrationUnit::Millimolar,
    ];

    fn symbol(self) -> &'static str {
        match self {
            ConcentrationUnit::MicrogramPerMilliliter => "µg/mL",
            ConcentrationUnit::MilligramPerMilliliter => "mg/mL",
            ConcentrationUnit::GramPerMilliliter => "g/mL",
            ConcentrationUnit::KilogramPerMilliliter => "kg/mL",
            ConcentrationUnit::MicrogramPerLiter => "µg/L",
            ConcentrationUnit::MilligramPerLiter => "mg/L",
            ConcentrationUnit::GramPerLiter => "g/L",
            ConcentrationUnit::KilogramPerLiter => "kg/L",
            ConcentrationUnit::Ppm => "ppm",
            ConcentrationUnit::Ppb => "ppb",
            ConcentrationUnit::Percent => "%",
            ConcentrationUnit::Molar => "M",
            ConcentrationUnit::Millimolar => "mM",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            ConcentrationUnit::MicrogramPerMilliliter => &["ug/mL", "μg/mL"],
            ConcentrationUnit::MicrogramPerLiter => &["ug/L", "μg/L"],
            ConcentrationUnit::Percent => &["percent"],
            ConcentrationUnit::Molar => &["mol/L"],
            ConcentrationUnit::Millimolar => &["mmol/L"],
            _ => &[],
        }
    }
}

fn valid_molecular_weight(molecular_weight: Option<f64>) -> Result<f64, ConversionError> {
    match molecular_weight {
        Some(mw) if mw.is_finite() && mw > 0.0 => Ok(mw),
        _ => Err(ConversionError::MissingMolecularWeight),
    }
}

/// 주어진 농도를 µg/mL 로 변환한다. 몰 농도는 분자량이 필요하다.
pub fn to_microgram_per_ml(
    value: f64,
    unit: ConcentrationUnit,
    molecular_weight: Option<f64>,
) -> Result<f64, ConversionError> {
    match unit.scale() {
        ConcentrationScale::Fixed(factor) => Ok(value * factor),
        ConcentrationScale::Molar(scale) => {
            Ok(value * valid_molecular_weight(molecular_weight)? * scale)
        }
    }
}

/// µg/mL 값을 원하는 농도 단위로 변환한다.
pub fn from_microgram_per_ml(
    value_ug_ml: f64,
    unit: ConcentrationUnit,
    molecular_weight: Option<f64>,
) -> Result<f64, ConversionError> {
    match unit.scale() {
        ConcentrationScale::Fixed(factor) => Ok(value_ug_ml / factor),
        ConcentrationScale::Molar(scale) => {
            Ok(value_ug_ml / (valid_molecular_weight(molecular_weight)? * scale))
        }
    }
}

/// 농도를 변환한다.
///
/// 한쪽이라도 몰 농도(M, mM)이면 양의 분자량(g/mol)이 반드시 있어야 하며,
/// 없거나 0 이하이면 [`ConversionError::MissingMolecularWeight`] 를 돌려준다.
/// 테이블 단위끼리의 변환은 분자량을 보지 않는다.
pub fn convert_concentration(
    value: f64,
    from: ConcentrationUnit,
    to: ConcentrationUnit,
    molecular_weight: Option<f64>,
) -> Result<f64, ConversionError> {
    if from.is_molar() || to.is_molar() {
        valid_molecular_weight(molecular_weight)?;
    }
    if from == to {
        return Ok(value);
    }
    let base = to_microgram_per_ml(value, from, molecular_weight)?;
    from_microgram_per_ml(base, to, molecular_weight)
}
