use serde::{Deserialize, Serialize};

use super::Unit;
use crate::quantity::Domain;

/// 1 g 에 해당하는 µg. 질량 테이블의 기준(µg)과 밀도 브리지의 그램 사이를 잇는다.
pub const MICROGRAMS_PER_GRAM: f64 = 1_000_000.0;

/// 질량 단위. 내부 기준은 µg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassUnit {
    Microgram,
    Milligram,
    Gram,
    Kilogram,
    Ounce,
    Pound,
    Grain,
}

impl MassUnit {
    /// 1 단위가 몇 µg 인지.
    pub const fn factor(self) -> f64 {
        match self {
            MassUnit::Microgram => 1.0,
            MassUnit::Milligram => 1000.0,
            MassUnit::Gram => 1_000_000.0,
            MassUnit::Kilogram => 1e9,
            MassUnit::Ounce => 28_349_523.125,
            MassUnit::Pound => 453_592_370.0,
            MassUnit::Grain => 64_798.91,
        }
    }
}

impl Unit for MassUnit {
    const DOMAIN: Domain = Domain::Mass;
    const BASE: Self = MassUnit::Microgram;
    const ALL: &'static [Self] = &[
        MassUnit::Microgram,
        MassUnit::Milligram,
        MassUnit::Gram,
        MassUnit::Kilogram,
        MassUnit::Ounce,
        MassUnit::Pound,
        MassUnit::Grain,
    ];

    fn symbol(self) -> &'static str {
        match self {
            MassUnit::Microgram => "µg",
            MassUnit::Milligram => "mg",
            MassUnit::Gram => "g",
            MassUnit::Kilogram => "kg",
            MassUnit::Ounce => "oz",
            MassUnit::Pound => "lb",
            MassUnit::Grain => "grain",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            MassUnit::Microgram => &["ug", "μg", "mcg"],
            MassUnit::Pound => &["lbs"],
            MassUnit::Grain => &["gr", "grains"],
            _ => &[],
        }
    }
}

fn to_microgram(value: f64, unit: MassUnit) -> f64 {
    value * unit.factor()
}

fn from_microgram(value_ug: f64, unit: MassUnit) -> f64 {
    value_ug / unit.factor()
}

/// 질량을 그램으로 변환한다.
pub fn to_gram(value: f64, unit: MassUnit) -> f64 {
    to_microgram(value, unit) / MICROGRAMS_PER_GRAM
}

/// 그램 값을 원하는 질량 단위로 변환한다.
pub fn from_gram(value_g: f64, unit: MassUnit) -> f64 {
    from_microgram(value_g * MICROGRAMS_PER_GRAM, unit)
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    if from == to {
        return value;
    }
    let base = to_microgram(value, from);
    from_microgram(base, to)
}
