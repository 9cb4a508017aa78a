use serde::{Deserialize, Serialize};

use super::Unit;
use crate::quantity::Domain;

/// 체적 단위. 내부 기준은 mL이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    Milliliter,
    Liter,
    Microliter,
    Deciliter,
    FluidOunce,
    Cup,
    Pint,
    Quart,
    Gallon,
    Teaspoon,
    Tablespoon,
    Drop,
}

impl VolumeUnit {
    /// 1 단위가 몇 mL 인지.
    pub const fn factor(self) -> f64 {
        match self {
            VolumeUnit::Milliliter => 1.0,
            VolumeUnit::Liter => 1000.0,
            VolumeUnit::Microliter => 0.001,
            VolumeUnit::Deciliter => 100.0,
            VolumeUnit::FluidOunce => 29.5735,
            VolumeUnit::Cup => 236.588,
            VolumeUnit::Pint => 473.176,
            VolumeUnit::Quart => 946.353,
            VolumeUnit::Gallon => 3785.41,
            VolumeUnit::Teaspoon => 4.92892,
            VolumeUnit::Tablespoon => 14.7868,
            VolumeUnit::Drop => 0.05,
        }
    }

    /// 계량(조리) 단위 여부. `CulinaryUnits` 정책에서는 이 단위가 한쪽에라도 있으면
    /// 밀도를 거쳐 환산한다.
    pub const fn requires_density_bridge(self) -> bool {
        matches!(
            self,
            VolumeUnit::Cup | VolumeUnit::Tablespoon | VolumeUnit::Teaspoon | VolumeUnit::FluidOunce
        )
    }
}

impl Unit for VolumeUnit {
    const DOMAIN: Domain = Domain::Volume;
    const BASE: Self = VolumeUnit::Milliliter;
    const ALL: &'static [Self] = &[
        VolumeUnit::Milliliter,
        VolumeUnit::Liter,
        VolumeUnit::Microliter,
        VolumeUnit::Deciliter,
        VolumeUnit::FluidOunce,
        VolumeUnit::Cup,
        VolumeUnit::Pint,
        VolumeUnit::Quart,
        VolumeUnit::Gallon,
        VolumeUnit::Teaspoon,
        VolumeUnit::Tablespoon,
        VolumeUnit::Drop,
    ];

    fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::Milliliter => "mL",
            VolumeUnit::Liter => "L",
            VolumeUnit::Microliter => "µL",
            VolumeUnit::Deciliter => "dL",
            VolumeUnit::FluidOunce => "fl oz",
            VolumeUnit::Cup => "cup",
            VolumeUnit::Pint => "pint",
            VolumeUnit::Quart => "quart",
            VolumeUnit::Gallon => "gallon",
            VolumeUnit::Teaspoon => "tsp",
            VolumeUnit::Tablespoon => "tbsp",
            VolumeUnit::Drop => "drop",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            VolumeUnit::Microliter => &["uL", "μL"],
            VolumeUnit::FluidOunce => &["floz", "fl_oz", "fl-oz"],
            VolumeUnit::Cup => &["cups"],
            VolumeUnit::Gallon => &["gal"],
            VolumeUnit::Teaspoon => &["teaspoon"],
            VolumeUnit::Tablespoon => &["tablespoon"],
            VolumeUnit::Drop => &["drops"],
            _ => &[],
        }
    }
}

/// 주어진 체적을 mL로 변환한다.
pub fn to_milliliter(value: f64, unit: VolumeUnit) -> f64 {
    value * unit.factor()
}

/// mL 값을 원하는 단위로 변환한다.
pub fn from_milliliter(value_ml: f64, unit: VolumeUnit) -> f64 {
    value_ml / unit.factor()
}

/// 체적을 변환한다. 같은 단위끼리는 값을 그대로 돌려준다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    if from == to {
        return value;
    }
    let ml = to_milliliter(value, from);
    from_milliliter(ml, to)
}
