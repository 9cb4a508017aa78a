use thiserror::Error;
use tracing::debug;

use crate::bridge;
use crate::quantity::Domain;
use crate::units::{self, ConcentrationUnit, Density, DensityUnit, MassUnit, Unit, VolumeUnit};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 해당 도메인 테이블에 없는 단위 문자열
    #[error("알 수 없는 {domain} 단위: {unit}")]
    UnknownUnit { domain: Domain, unit: String },
    /// 숫자가 아니거나 도메인에서 허용하지 않는 크기(예: 음수 체적)
    #[error("잘못된 값 {value}: {reason}")]
    InvalidMagnitude { value: f64, reason: &'static str },
    /// 몰 농도 변환인데 양의 분자량이 없음
    #[error("몰 농도(M, mM) 변환에는 0보다 큰 분자량(g/mol)이 필요합니다.")]
    MissingMolecularWeight,
    /// 밀도 브리지에 0 이하 또는 유한하지 않은 밀도가 들어옴
    #[error("밀도는 0보다 커야 합니다: {0}")]
    InvalidDensity(f64),
    /// 계량 단위 브리지 정책에서 밀도가 주어지지 않음
    #[error("계량 단위(cup, tbsp, tsp, fl oz) 변환에는 밀도가 필요합니다.")]
    MissingDensity,
}

/// 크기 값을 도메인 규칙에 맞게 검사한다.
/// 유한하지 않은 값은 항상 거부하고, 체적/질량은 음수도 거부한다.
pub fn check_magnitude(domain: Domain, value: f64) -> Result<(), ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidMagnitude {
            value,
            reason: "유한한 숫자가 아닙니다.",
        });
    }
    if value < 0.0 && !domain.allows_negative() {
        return Err(ConversionError::InvalidMagnitude {
            value,
            reason: "물리량은 음수가 될 수 없습니다.",
        });
    }
    Ok(())
}

/// 변환 결과가 유한한지 검사한다. 입력이 유한해도 넘침(overflow)이나
/// 아주 작은 밀도로 나눈 결과는 무한대가 될 수 있다.
pub fn check_result(value: f64) -> Result<f64, ConversionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConversionError::InvalidMagnitude {
            value,
            reason: "결과가 표현 범위를 벗어납니다.",
        })
    }
}

/// 단위 문자열을 해당 도메인의 enum 으로 바꾼다.
pub fn parse_unit<U: Unit>(s: &str) -> Result<U, ConversionError> {
    U::parse(s).ok_or_else(|| ConversionError::UnknownUnit {
        domain: U::DOMAIN,
        unit: s.trim().to_string(),
    })
}

/// 문자열로 전달된 단위명을 테이블에서 찾아 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `mL`, `cup`, `kg`, `g/cm³`(또는 `g/cm3`), `ppm` 등이다.
/// 농도 도메인에서 몰 단위(M, mM)가 끼면 분자량이 없으므로
/// [`ConversionError::MissingMolecularWeight`] 가 된다. 분자량은
/// [`convert_concentration`] 으로 넘긴다.
pub fn convert(
    domain: Domain,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    check_magnitude(domain, value)?;
    let result = check_result(units::table(domain).convert(value, from_unit_str, to_unit_str)?)?;
    debug!(%domain, value, from = from_unit_str, to = to_unit_str, result, "scalar conversion");
    Ok(result)
}

/// 농도를 변환한다. 몰 단위가 한쪽이라도 있으면 분자량(g/mol)이 필수다.
pub fn convert_concentration(
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
    molecular_weight: Option<f64>,
) -> Result<f64, ConversionError> {
    check_magnitude(Domain::Concentration, value)?;
    let from: ConcentrationUnit = parse_unit(from_unit_str)?;
    let to: ConcentrationUnit = parse_unit(to_unit_str)?;
    let result = check_result(units::convert_concentration(value, from, to, molecular_weight)?)?;
    debug!(
        value,
        from = from_unit_str,
        to = to_unit_str,
        ?molecular_weight,
        result,
        "concentration conversion"
    );
    Ok(result)
}

/// 체적과 밀도로 질량을 구한다.
pub fn volume_to_mass(
    volume_value: f64,
    volume_unit: &str,
    density_value: f64,
    density_unit: &str,
    target_mass_unit: &str,
) -> Result<f64, ConversionError> {
    let volume_unit: VolumeUnit = parse_unit(volume_unit)?;
    let density_unit: DensityUnit = parse_unit(density_unit)?;
    let mass_unit: MassUnit = parse_unit(target_mass_unit)?;
    bridge::volume_to_mass(
        volume_value,
        volume_unit,
        Density::new(density_value, density_unit),
        mass_unit,
    )
}

/// 질량과 밀도로 체적을 구한다.
pub fn mass_to_volume(
    mass_value: f64,
    mass_unit: &str,
    density_value: f64,
    density_unit: &str,
    target_volume_unit: &str,
) -> Result<f64, ConversionError> {
    let mass_unit: MassUnit = parse_unit(mass_unit)?;
    let density_unit: DensityUnit = parse_unit(density_unit)?;
    let volume_unit: VolumeUnit = parse_unit(target_volume_unit)?;
    bridge::mass_to_volume(
        mass_value,
        mass_unit,
        Density::new(density_value, density_unit),
        volume_unit,
    )
}

/// 결과를 고정 소수 자릿수로 표시한다. `-0.000000` 같은 표기는 0 으로 정리한다.
pub fn format_magnitude(value: f64, decimals: usize) -> String {
    let s = format!("{value:.decimals$}");
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}
