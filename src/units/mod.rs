//! 단위 정의 및 변환 모듈 모음.

pub mod concentration;
pub mod density;
pub mod mass;
pub mod table;
pub mod volume;

pub use concentration::{convert_concentration, ConcentrationScale, ConcentrationUnit};
pub use density::{convert_density, Density, DensityUnit};
pub use mass::{convert_mass, MassUnit};
pub use table::{table, UnitEntry, UnitTable};
pub use volume::{convert_volume, VolumeUnit};

use crate::quantity::Domain;

/// 도메인별 단위 enum 이 공통으로 제공하는 표 정보.
pub trait Unit: Copy + Eq + 'static {
    /// 이 단위가 속한 도메인.
    const DOMAIN: Domain;
    /// 계수 1.0 으로 지정된 기준 단위.
    const BASE: Self;
    /// 화면 표시 순서대로 나열한 전체 단위.
    const ALL: &'static [Self];

    /// 표준 표기. 사용자 입력과 출력에 그대로 쓰인다.
    fn symbol(self) -> &'static str;

    /// ASCII 입력 등을 위한 별칭.
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    /// 단위 문자열을 enum 으로 바꾼다.
    ///
    /// 표기/별칭이 정확히 일치하면 우선하고, 아니면 대소문자를 무시해 비교하되
    /// 후보가 하나뿐일 때만 받아들인다(`M`/`mM` 처럼 대소문자로만 갈리는 단위 보호).
    fn parse(s: &str) -> Option<Self> {
        table::resolve_symbol(Self::ALL.iter().map(|&u| (u, u.symbol(), u.aliases())), s)
    }
}
