//! 자주 쓰는 물질의 밀도 프리셋. 상온 기준 대표값이며 참고용이다.

use crate::units::density::Density;

#[derive(Debug)]
pub struct Substance {
    pub key: &'static str,
    pub name: &'static str,
    /// 밀도 [g/mL]
    pub density_g_per_ml: f64,
    pub aliases: &'static [&'static str],
}

impl Substance {
    pub fn density(&self) -> Density {
        Density::grams_per_ml(self.density_g_per_ml)
    }
}

pub fn substances() -> &'static [Substance] {
    SUBSTANCES
}

/// 키, 이름, 별칭 중 하나와 대소문자 구분 없이 일치하는 프리셋을 찾는다.
pub fn find_substance(name: &str) -> Option<&'static Substance> {
    let name = name.trim();
    SUBSTANCES.iter().find(|s| {
        s.key.eq_ignore_ascii_case(name)
            || s.name.eq_ignore_ascii_case(name)
            || s.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    })
}

const SUBSTANCES: &[Substance] = &[
    Substance {
        key: "water",
        name: "Water",
        density_g_per_ml: 1.0,
        aliases: &["물", "h2o"],
    },
    Substance {
        key: "oil",
        name: "Vegetable oil",
        density_g_per_ml: 0.9,
        aliases: &["기름", "식용유", "cooking oil"],
    },
    Substance {
        key: "alcohol",
        name: "Ethanol",
        density_g_per_ml: 0.8,
        aliases: &["알코올", "ethanol"],
    },
    Substance {
        key: "honey",
        name: "Honey",
        density_g_per_ml: 1.4,
        aliases: &["꿀"],
    },
    Substance {
        key: "milk",
        name: "Milk",
        density_g_per_ml: 1.03,
        aliases: &["우유"],
    },
    Substance {
        key: "blood",
        name: "Whole blood",
        density_g_per_ml: 1.06,
        aliases: &["혈액"],
    },
    Substance {
        key: "mercury",
        name: "Mercury",
        density_g_per_ml: 13.6,
        aliases: &["수은", "hg"],
    },
    Substance {
        key: "gasoline",
        name: "Gasoline",
        density_g_per_ml: 0.75,
        aliases: &["휘발유", "petrol"],
    },
];
