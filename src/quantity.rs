use serde::{Deserialize, Serialize};

/// 다루는 물리량 종류(도메인)를 나타낸다.
///
/// 각 도메인은 자신만의 단위 테이블을 가지며, 체적↔질량 브리지를 제외하면
/// 서로 섞이지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Volume,
    Mass,
    Density,
    Concentration,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Volume,
        Domain::Mass,
        Domain::Density,
        Domain::Concentration,
    ];

    /// 로그/오류 메시지용 이름.
    pub fn name(self) -> &'static str {
        match self {
            Domain::Volume => "volume",
            Domain::Mass => "mass",
            Domain::Density => "density",
            Domain::Concentration => "concentration",
        }
    }

    /// 음수 크기를 허용하는지 여부. 체적/질량은 물리적인 양이므로 음수를 거부한다.
    pub fn allows_negative(self) -> bool {
        matches!(self, Domain::Density | Domain::Concentration)
    }

    /// `volume`, `mass` 같은 이름(대소문자 무시)을 도메인으로 바꾼다.
    pub fn from_name(s: &str) -> Option<Domain> {
        match s.trim().to_lowercase().as_str() {
            "volume" | "vol" | "v" => Some(Domain::Volume),
            "mass" | "weight" | "m" => Some(Domain::Mass),
            "density" | "rho" | "d" => Some(Domain::Density),
            "concentration" | "conc" | "c" => Some(Domain::Concentration),
            _ => None,
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
