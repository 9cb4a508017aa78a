//! 문자열 단위명 → 계수 테이블.
//!
//! 타입 있는 단위 enum 에서 도메인마다 한 번씩 만들어지며 이후로는 읽기만 한다.
//! 문자열로 들어오는 요청과 단위 목록 표시는 이 테이블을 거친다.

use std::sync::LazyLock;

use super::{ConcentrationUnit, DensityUnit, MassUnit, Unit, VolumeUnit};
use crate::conversion::ConversionError;
use crate::quantity::Domain;

/// 테이블의 한 행.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitEntry {
    pub symbol: &'static str,
    pub aliases: &'static [&'static str],
    /// 기준 단위 대비 계수. 몰 농도처럼 보조 입력이 있어야 하는 단위는 `None`.
    pub factor: Option<f64>,
    /// 몰 농도 단위의 µg/mL 스케일(분자량 1 g/mol 기준).
    pub molar_scale: Option<f64>,
    /// 지정된 기준 단위 여부.
    pub is_base: bool,
    /// 계량 단위라서 밀도 브리지가 필요한지.
    pub density_bridge: bool,
}

/// 한 도메인의 단위 테이블.
#[derive(Debug)]
pub struct UnitTable {
    domain: Domain,
    entries: Vec<UnitEntry>,
}

static VOLUME_TABLE: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::from_units::<VolumeUnit>(
        |u| Some(u.factor()),
        |_| None,
        VolumeUnit::requires_density_bridge,
    )
});

static MASS_TABLE: LazyLock<UnitTable> =
    LazyLock::new(|| UnitTable::from_units::<MassUnit>(|u| Some(u.factor()), |_| None, |_| false));

static DENSITY_TABLE: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::from_units::<DensityUnit>(|u| Some(u.factor()), |_| None, |_| false)
});

static CONCENTRATION_TABLE: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::from_units::<ConcentrationUnit>(
        ConcentrationUnit::factor,
        ConcentrationUnit::molar_scale,
        |_| false,
    )
});

/// 도메인의 단위 테이블을 돌려준다. 최초 호출 시 한 번 만들어진다.
pub fn table(domain: Domain) -> &'static UnitTable {
    match domain {
        Domain::Volume => &VOLUME_TABLE,
        Domain::Mass => &MASS_TABLE,
        Domain::Density => &DENSITY_TABLE,
        Domain::Concentration => &CONCENTRATION_TABLE,
    }
}

impl UnitTable {
    fn from_units<U: Unit>(
        factor: fn(U) -> Option<f64>,
        molar_scale: fn(U) -> Option<f64>,
        density_bridge: fn(U) -> bool,
    ) -> Self {
        let entries = U::ALL
            .iter()
            .map(|&u| UnitEntry {
                symbol: u.symbol(),
                aliases: u.aliases(),
                factor: factor(u),
                molar_scale: molar_scale(u),
                is_base: u == U::BASE,
                density_bridge: density_bridge(u),
            })
            .collect();
        Self {
            domain: U::DOMAIN,
            entries,
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn entries(&self) -> &[UnitEntry] {
        &self.entries
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.symbol)
    }

    /// 지정된 기준 단위 행.
    pub fn base(&self) -> Option<&UnitEntry> {
        self.entries.iter().find(|e| e.is_base)
    }

    /// 단위 문자열로 행을 찾는다. 규칙은 [`Unit::parse`] 와 같다.
    pub fn lookup(&self, symbol: &str) -> Result<&UnitEntry, ConversionError> {
        resolve_symbol(
            self.entries.iter().map(|e| (e, e.symbol, e.aliases)),
            symbol,
        )
        .ok_or_else(|| ConversionError::UnknownUnit {
            domain: self.domain,
            unit: symbol.trim().to_string(),
        })
    }

    /// 기준 단위로 정규화한 뒤(×from) 목표 단위로 나눈다(÷to).
    /// 같은 단위면 값을 그대로 돌려준다. 고정 계수가 없는 몰 농도 단위는
    /// 분자량이 필요하므로 [`ConversionError::MissingMolecularWeight`].
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        let from = self.lookup(from)?;
        let to = self.lookup(to)?;
        let (Some(a), Some(b)) = (from.factor, to.factor) else {
            return Err(ConversionError::MissingMolecularWeight);
        };
        if from.symbol == to.symbol {
            return Ok(value);
        }
        Ok(value * a / b)
    }

    /// 테이블 불변식 검사: 기준 단위가 정확히 하나이고 계수가 1.0,
    /// 모든 계수는 양의 유한수, 표기는 중복되지 않는다.
    pub fn is_consistent(&self) -> bool {
        let bases: Vec<_> = self.entries.iter().filter(|e| e.is_base).collect();
        if bases.len() != 1 || bases[0].factor != Some(1.0) {
            return false;
        }
        let factors_ok = self.entries.iter().all(|e| {
            let positive = |f: f64| f.is_finite() && f > 0.0;
            match (e.factor, e.molar_scale) {
                (Some(f), None) => positive(f),
                (None, Some(s)) => positive(s),
                _ => false,
            }
        });
        let unique = self
            .entries
            .iter()
            .enumerate()
            .all(|(i, e)| self.entries[..i].iter().all(|p| p.symbol != e.symbol));
        factors_ok && unique
    }
}

/// 표기 또는 별칭이 정확히 같은 후보를 먼저 찾고, 없으면 대소문자를 무시해
/// 유일하게 맞는 후보만 받아들인다.
pub(crate) fn resolve_symbol<T, I>(candidates: I, input: &str) -> Option<T>
where
    I: Iterator<Item = (T, &'static str, &'static [&'static str])> + Clone,
{
    let input = input.trim();
    if let Some((found, _, _)) = candidates
        .clone()
        .find(|(_, symbol, aliases)| *symbol == input || aliases.contains(&input))
    {
        return Some(found);
    }

    let lower = input.to_lowercase();
    let mut hits = candidates.filter(|(_, symbol, aliases)| {
        symbol.to_lowercase() == lower || aliases.iter().any(|a| a.to_lowercase() == lower)
    });
    let (first, _, _) = hits.next()?;
    match hits.next() {
        Some(_) => None,
        None => Some(first),
    }
}
