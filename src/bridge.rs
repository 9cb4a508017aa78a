//! 밀도를 매개로 한 체적↔질량 변환.
//!
//! 체적 테이블(mL)과 질량 테이블(µg)은 서로 독립이다. 둘을 잇는 것은 세 번째 계수표가
//! 아니라 `g = mL × g/mL` 라는 물리 관계 하나뿐이다.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conversion::{check_magnitude, check_result, ConversionError};
use crate::quantity::Domain;
use crate::units::density::Density;
use crate::units::mass::{from_gram, to_gram, MassUnit};
use crate::units::volume::{convert_volume, from_milliliter, to_milliliter, VolumeUnit};

/// 계량 단위(cup, tbsp, tsp, fl oz)를 다른 체적 단위와 어떻게 바꿀지 정하는 정책.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BridgePolicy {
    /// 체적끼리는 항상 테이블로 바로 변환한다.
    #[default]
    Never,
    /// 한쪽이라도 계량 단위면 밀도를 거쳐(체적→질량→체적) 변환한다.
    CulinaryUnits,
}

impl BridgePolicy {
    /// 두 체적 단위 사이 변환에 밀도 브리지가 필요한지.
    pub fn requires_bridge(self, from: VolumeUnit, to: VolumeUnit) -> bool {
        match self {
            BridgePolicy::Never => false,
            BridgePolicy::CulinaryUnits => {
                from.requires_density_bridge() || to.requires_density_bridge()
            }
        }
    }
}

/// 체적을 질량으로 바꾼다.
///
/// 체적 → mL, 밀도 → g/mL, 질량(g) = mL × g/mL, 마지막으로 목표 질량 단위로 환산한다.
pub fn volume_to_mass(
    volume: f64,
    volume_unit: VolumeUnit,
    density: Density,
    mass_unit: MassUnit,
) -> Result<f64, ConversionError> {
    check_magnitude(Domain::Volume, volume)?;
    let g_per_ml = density.to_grams_per_ml()?;
    let grams = to_milliliter(volume, volume_unit) * g_per_ml;
    let result = check_result(from_gram(grams, mass_unit))?;
    debug!(volume, ?volume_unit, g_per_ml, grams, result, "volume to mass");
    Ok(result)
}

/// 질량을 체적으로 바꾼다. [`volume_to_mass`] 의 역방향으로, 곱 대신 나눈다.
pub fn mass_to_volume(
    mass: f64,
    mass_unit: MassUnit,
    density: Density,
    volume_unit: VolumeUnit,
) -> Result<f64, ConversionError> {
    check_magnitude(Domain::Mass, mass)?;
    // 0 이하 밀도는 여기서 걸러지므로 아래 나눗셈은 0 으로 나누지 않는다.
    let g_per_ml = density.to_grams_per_ml()?;
    let ml = to_gram(mass, mass_unit) / g_per_ml;
    let result = check_result(from_milliliter(ml, volume_unit))?;
    debug!(mass, ?mass_unit, g_per_ml, ml, result, "mass to volume");
    Ok(result)
}

/// 정책에 따라 체적을 변환한다.
///
/// 브리지가 필요하면 밀도가 반드시 있어야 하며(없으면 [`ConversionError::MissingDensity`]),
/// 값은 기준 질량(g)을 거쳐 되돌아온다. 브리지가 필요 없으면 테이블 변환과 같다.
pub fn convert_volume_with_policy(
    value: f64,
    from: VolumeUnit,
    to: VolumeUnit,
    density: Option<Density>,
    policy: BridgePolicy,
) -> Result<f64, ConversionError> {
    check_magnitude(Domain::Volume, value)?;
    if !policy.requires_bridge(from, to) {
        return check_result(convert_volume(value, from, to));
    }
    let density = density.ok_or(ConversionError::MissingDensity)?;
    if from == to {
        density.to_grams_per_ml()?;
        return Ok(value);
    }
    let grams = volume_to_mass(value, from, density, MassUnit::Gram)?;
    mass_to_volume(grams, MassUnit::Gram, density, to)
}
