use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::debug;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_VOLUME: &str = "main_menu.volume";
    pub const MAIN_MENU_MASS: &str = "main_menu.mass";
    pub const MAIN_MENU_DENSITY: &str = "main_menu.density";
    pub const MAIN_MENU_CONCENTRATION: &str = "main_menu.concentration";
    pub const MAIN_MENU_VOLUME_MASS: &str = "main_menu.volume_mass";
    pub const MAIN_MENU_UNITS: &str = "main_menu.units";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const HEADING_VOLUME: &str = "conversion.heading_volume";
    pub const HEADING_MASS: &str = "conversion.heading_mass";
    pub const HEADING_DENSITY: &str = "conversion.heading_density";
    pub const HEADING_CONCENTRATION: &str = "conversion.heading_concentration";
    pub const HEADING_VOLUME_MASS: &str = "conversion.heading_volume_mass";
    pub const AVAILABLE_UNITS: &str = "conversion.available_units";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const PROMPT_FROM_UNIT: &str = "prompt.from_unit";
    pub const PROMPT_TO_UNIT: &str = "prompt.to_unit";
    pub const PROMPT_MOLECULAR_WEIGHT: &str = "prompt.molecular_weight";
    pub const PROMPT_DENSITY: &str = "prompt.density";
    pub const PROMPT_DENSITY_UNIT: &str = "prompt.density_unit";
    pub const VOLUME_MASS_DIRECTION: &str = "conversion.volume_mass_direction";
    pub const NOTE_CULINARY_BRIDGE: &str = "conversion.note_culinary_bridge";
    pub const NOTE_MOLAR: &str = "conversion.note_molar";
    pub const RESULT: &str = "conversion.result";

    pub const UNITS_HEADING: &str = "units.heading";
    pub const UNITS_BASE_MARK: &str = "units.base_mark";
    pub const UNITS_BRIDGE_MARK: &str = "units.bridge_mark";
    pub const UNITS_MOLAR_MARK: &str = "units.molar_mark";
    pub const SUBSTANCES_HEADING: &str = "substances.heading";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_DECIMALS: &str = "settings.prompt_decimals";
    pub const SETTINGS_PROMPT_POLICY: &str = "settings.prompt_policy";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const HELP_CONVERSION: &str = "help.conversion";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        if overrides.is_some() {
            debug!(lang = lang_code, "language pack loaded");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 한국어 순으로 찾는다.
    pub fn t(&self, key: &str) -> Cow<'_, str> {
        if let Some(v) = self.lookup(key) {
            return Cow::Borrowed(v);
        }
        let s = match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        };
        Cow::Borrowed(s)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|lang| normalize_locale_string(&lang))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== UnitSwap 단위 변환기 ===",
        MAIN_MENU_VOLUME => "1) 체적",
        MAIN_MENU_MASS => "2) 질량",
        MAIN_MENU_DENSITY => "3) 밀도",
        MAIN_MENU_CONCENTRATION => "4) 농도",
        MAIN_MENU_VOLUME_MASS => "5) 체적 ↔ 질량",
        MAIN_MENU_UNITS => "6) 단위/물질 목록",
        MAIN_MENU_SETTINGS => "7) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        HEADING_VOLUME => "\n-- 체적 변환 --",
        HEADING_MASS => "\n-- 질량 변환 --",
        HEADING_DENSITY => "\n-- 밀도 변환 --",
        HEADING_CONCENTRATION => "\n-- 농도 변환 --",
        HEADING_VOLUME_MASS => "\n-- 체적 ↔ 질량 --",
        AVAILABLE_UNITS => "사용 가능한 단위:",
        PROMPT_VALUE => "값 입력: ",
        PROMPT_FROM_UNIT => "입력 단위: ",
        PROMPT_TO_UNIT => "변환 단위: ",
        PROMPT_MOLECULAR_WEIGHT => "분자량 [g/mol]: ",
        PROMPT_DENSITY => "밀도 값 또는 물질 이름 (엔터=기본 물질): ",
        PROMPT_DENSITY_UNIT => "밀도 단위 (엔터=g/mL): ",
        VOLUME_MASS_DIRECTION => "1) 체적 → 질량  2) 질량 → 체적",
        NOTE_CULINARY_BRIDGE => {
            "참고: 계량 단위 브리지가 켜져 있어 cup/tbsp/tsp/fl oz 변환에는 밀도를 사용합니다."
        }
        NOTE_MOLAR => "참고: M, mM 이 포함되면 분자량을 입력해야 합니다.",
        RESULT => "변환 결과:",
        UNITS_HEADING => "\n-- 단위 목록 --",
        UNITS_BASE_MARK => "(기준)",
        UNITS_BRIDGE_MARK => "(밀도 브리지)",
        UNITS_MOLAR_MARK => "(분자량 필요)",
        SUBSTANCES_HEADING => "\n-- 물질 밀도 프리셋 --",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 소수 자릿수  2) 계량 단위 브리지 정책  3) 언어",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_DECIMALS => "소수 자릿수 (0~12): ",
        SETTINGS_PROMPT_POLICY => "1) 사용 안 함(Never)  2) 계량 단위(CulinaryUnits): ",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (auto/ko/en): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        HELP_CONVERSION => "도움말: 값 → 입력 단위 → 변환 단위 순으로 입력 (예: 1, cup, mL).",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== UnitSwap Unit Converter ===",
        MAIN_MENU_VOLUME => "1) Volume",
        MAIN_MENU_MASS => "2) Mass",
        MAIN_MENU_DENSITY => "3) Density",
        MAIN_MENU_CONCENTRATION => "4) Concentration",
        MAIN_MENU_VOLUME_MASS => "5) Volume ↔ Mass",
        MAIN_MENU_UNITS => "6) Units / substances",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        HEADING_VOLUME => "\n-- Volume --",
        HEADING_MASS => "\n-- Mass --",
        HEADING_DENSITY => "\n-- Density --",
        HEADING_CONCENTRATION => "\n-- Concentration --",
        HEADING_VOLUME_MASS => "\n-- Volume ↔ Mass --",
        AVAILABLE_UNITS => "Available units:",
        PROMPT_VALUE => "Value: ",
        PROMPT_FROM_UNIT => "From unit: ",
        PROMPT_TO_UNIT => "To unit: ",
        PROMPT_MOLECULAR_WEIGHT => "Molecular weight [g/mol]: ",
        PROMPT_DENSITY => "Density value or substance name (enter = default substance): ",
        PROMPT_DENSITY_UNIT => "Density unit (enter = g/mL): ",
        VOLUME_MASS_DIRECTION => "1) Volume → Mass  2) Mass → Volume",
        NOTE_CULINARY_BRIDGE => {
            "Note: culinary bridge is on; cup/tbsp/tsp/fl oz conversions go through a density."
        }
        NOTE_MOLAR => "Note: conversions involving M or mM need a molecular weight.",
        RESULT => "Result:",
        UNITS_HEADING => "\n-- Units --",
        UNITS_BASE_MARK => "(base)",
        UNITS_BRIDGE_MARK => "(density bridge)",
        UNITS_MOLAR_MARK => "(needs molecular weight)",
        SUBSTANCES_HEADING => "\n-- Substance density presets --",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Decimal places  2) Culinary bridge policy  3) Language",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_DECIMALS => "Decimal places (0-12): ",
        SETTINGS_PROMPT_POLICY => "1) Never  2) CulinaryUnits: ",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        HELP_CONVERSION => "Help: enter value → from unit → to unit (e.g. 1, cup, mL).",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_falls_back_to_korean_for_unknown_key() {
        let tr = Translator::new("en");
        assert_eq!(tr.t(keys::ERROR_PREFIX), "Error");
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
    }

    #[test]
    fn unknown_language_code_uses_korean() {
        let tr = Translator::new("xx");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::ERROR_PREFIX), "오류");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-US")), "en");
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map("[general]\nerror_prefix = \"Fehler\"\n").unwrap();
        assert_eq!(map.get(keys::ERROR_PREFIX).map(String::as_str), Some("Fehler"));
    }
}
