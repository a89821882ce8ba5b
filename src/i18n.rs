use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_LATERAL: &str = "main_menu.lateral";
    pub const MAIN_MENU_CATALOGS: &str = "main_menu.catalogs";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const LATERAL_HEADING: &str = "lateral.heading";
    pub const LATERAL_HELP: &str = "lateral.help";
    pub const PROMPT_FLOW: &str = "prompt.flow";
    pub const PROMPT_SPACING: &str = "prompt.spacing";
    pub const PROMPT_LENGTH: &str = "prompt.length";
    pub const PROMPT_HEAD_LOSS: &str = "prompt.head_loss";
    pub const PROMPT_HAZEN_C: &str = "prompt.hazen_c";
    pub const PROMPT_CATALOG: &str = "prompt.catalog";
    pub const PROMPT_KEEP_DEFAULT: &str = "prompt.keep_default";

    pub const CATALOGS_HEADING: &str = "catalogs.heading";
    pub const CATALOGS_CUSTOM: &str = "catalogs.custom";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const PROMPT_LANGUAGE: &str = "prompt.language";
    pub const PROMPT_PAIR_POLICY: &str = "prompt.pair_policy";
    pub const PROMPT_MAX_VELOCITY: &str = "prompt.max_velocity";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_OUTLETS: &str = "report.outlets";
    pub const REPORT_FACTOR: &str = "report.factor";
    pub const REPORT_OUTLET_DISCHARGE: &str = "report.outlet_discharge";
    pub const REPORT_SCAN_HEADING: &str = "report.scan_heading";
    pub const REPORT_SCAN_COLUMNS: &str = "report.scan_columns";
    pub const REPORT_MEETS_YES: &str = "report.meets_yes";
    pub const REPORT_MEETS_NO: &str = "report.meets_no";
    pub const REPORT_SINGLE_HEADING: &str = "report.single_heading";
    pub const REPORT_SINGLE_NONE: &str = "report.single_none";
    pub const REPORT_TWO_HEADING: &str = "report.two_heading";
    pub const REPORT_TWO_NONE: &str = "report.two_none";
    pub const REPORT_DIAMETER: &str = "report.diameter";
    pub const REPORT_UPSTREAM: &str = "report.upstream";
    pub const REPORT_DOWNSTREAM: &str = "report.downstream";
    pub const REPORT_LOSS: &str = "report.loss";
    pub const REPORT_VELOCITY: &str = "report.velocity";
    pub const REPORT_TRANSIT: &str = "report.transit";
    pub const REPORT_SEGMENTS_SINGLE: &str = "report.segments_single";
    pub const REPORT_SEGMENTS_TWO: &str = "report.segments_two";
    pub const REPORT_SEGMENT_COLUMNS: &str = "report.segment_columns";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
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
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어팩 디렉터리(`<dir>/<code>.toml`)의 문자열로 내장 문자열을 덮어쓴다.
    /// 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        let builtin = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.unwrap_or("[missing translation]")
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
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    get_locale()
        .and_then(|loc| normalize_locale_string(&loc))
        .or_else(|| {
            ["LC_ALL", "LANG"]
                .iter()
                .filter_map(|var| std::env::var(var).ok())
                .find_map(|v| normalize_locale_string(&v))
        })
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    normalize_lang(&lang)
}

/// TOML 기반 언어팩을 로드한다. 중첩 테이블은 "a.b" 키로 평탄화한다.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let content = fs::read_to_string(dir.join(format!("{lang}.toml"))).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.clone());
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

    let value: toml::Value = toml::from_str(src).ok()?;
    let mut map = HashMap::new();
    walk("", &value, &mut map);
    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 횡지관 관경 설계 ===",
        MAIN_MENU_LATERAL => "1) 횡지관 사이징",
        MAIN_MENU_CATALOGS => "2) 관경 카탈로그",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        LATERAL_HEADING => "\n-- 횡지관 사이징 --",
        LATERAL_HELP => "도움말: Hazen-Williams + 다공 보정계수 F. 유속 한계와 허용 손실을 모두 만족하는 관경을 찾습니다.",
        PROMPT_FLOW => "총유량",
        PROMPT_SPACING => "배출구 간격",
        PROMPT_LENGTH => "횡지관 길이",
        PROMPT_HEAD_LOSS => "허용 마찰손실",
        PROMPT_HAZEN_C => "Hazen-Williams C",
        PROMPT_CATALOG => "카탈로그 코드",
        PROMPT_KEEP_DEFAULT => "(엔터 = 기본값)",
        CATALOGS_HEADING => "\n-- 관경 카탈로그 --",
        CATALOGS_CUSTOM => "사용자 정의",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 언어  2) 기본 C  3) 기본 카탈로그  4) 관경 조합 방식  5) 허용 유속",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다.",
        PROMPT_LANGUAGE => "언어 코드 (auto/ko/en): ",
        PROMPT_PAIR_POLICY => "조합 방식 1=인접 관경만 2=모든 작은 관경: ",
        PROMPT_MAX_VELOCITY => "허용 유속 [m/s]: ",
        REPORT_TITLE => "=== 횡지관 설계 결과 ===",
        REPORT_OUTLETS => "배출구 수:",
        REPORT_FACTOR => "다공 보정계수 F:",
        REPORT_OUTLET_DISCHARGE => "배출구당 유량 [m3/h]:",
        REPORT_SCAN_HEADING => "\n-- 관경별 검토 --",
        REPORT_SCAN_COLUMNS => "내경[mm]  유속[m/s]  손실[m]  적합",
        REPORT_MEETS_YES => "예",
        REPORT_MEETS_NO => "아니오",
        REPORT_SINGLE_HEADING => "\n-- 단일 관경 설계 --",
        REPORT_SINGLE_NONE => "경고: 조건을 만족하는 단일 관경이 없습니다.",
        REPORT_TWO_HEADING => "\n-- 이중 관경(점감) 설계 --",
        REPORT_TWO_NONE => "경고: 조건을 만족하는 이중 관경 조합이 없습니다.",
        REPORT_DIAMETER => "내경 [mm]:",
        REPORT_UPSTREAM => "상류:",
        REPORT_DOWNSTREAM => "하류:",
        REPORT_LOSS => "마찰손실 [m]:",
        REPORT_VELOCITY => "유속 [m/s]:",
        REPORT_TRANSIT => "도달시간 [min]:",
        REPORT_SEGMENTS_SINGLE => "\n-- 구간표 (단일 관경) --",
        REPORT_SEGMENTS_TWO => "\n-- 구간표 (이중 관경) --",
        REPORT_SEGMENT_COLUMNS => "번호  누적길이[m]  유량[m3/h]  내경[mm]  유속[m/s]  시간[s]  누적[min]",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Lateral Pipe Design ===",
        MAIN_MENU_LATERAL => "1) Size a lateral",
        MAIN_MENU_CATALOGS => "2) Diameter catalogs",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        LATERAL_HEADING => "\n-- Lateral Sizing --",
        LATERAL_HELP => "Help: Hazen-Williams with multi-outlet factor F. Finds diameters meeting both the velocity limit and the available head loss.",
        PROMPT_FLOW => "Total flow",
        PROMPT_SPACING => "Outlet spacing",
        PROMPT_LENGTH => "Lateral length",
        PROMPT_HEAD_LOSS => "Available friction loss",
        PROMPT_HAZEN_C => "Hazen-Williams C",
        PROMPT_CATALOG => "Catalog code",
        PROMPT_KEEP_DEFAULT => "(enter = default)",
        CATALOGS_HEADING => "\n-- Diameter Catalogs --",
        CATALOGS_CUSTOM => "user defined",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Language  2) Default C  3) Default catalog  4) Pair policy  5) Velocity limit",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings updated.",
        PROMPT_LANGUAGE => "Language code (auto/ko/en): ",
        PROMPT_PAIR_POLICY => "Pair policy 1=adjacent only 2=any smaller diameter: ",
        PROMPT_MAX_VELOCITY => "Velocity limit [m/s]: ",
        REPORT_TITLE => "=== Lateral Design Result ===",
        REPORT_OUTLETS => "Outlets:",
        REPORT_FACTOR => "Multi-outlet factor F:",
        REPORT_OUTLET_DISCHARGE => "Flow per outlet [m3/h]:",
        REPORT_SCAN_HEADING => "\n-- Catalog scan --",
        REPORT_SCAN_COLUMNS => "ID[mm]  V[m/s]  HF[m]  OK",
        REPORT_MEETS_YES => "yes",
        REPORT_MEETS_NO => "no",
        REPORT_SINGLE_HEADING => "\n-- Single-diameter design --",
        REPORT_SINGLE_NONE => "Warning: no single diameter meets the constraints.",
        REPORT_TWO_HEADING => "\n-- Two-diameter (progressive) design --",
        REPORT_TWO_NONE => "Warning: no two-diameter combination meets the constraints.",
        REPORT_DIAMETER => "Inner diameter [mm]:",
        REPORT_UPSTREAM => "Upstream:",
        REPORT_DOWNSTREAM => "Downstream:",
        REPORT_LOSS => "Friction loss [m]:",
        REPORT_VELOCITY => "Velocity [m/s]:",
        REPORT_TRANSIT => "Time of advance [min]:",
        REPORT_SEGMENTS_SINGLE => "\n-- Segment table (single diameter) --",
        REPORT_SEGMENTS_TWO => "\n-- Segment table (two diameters) --",
        REPORT_SEGMENT_COLUMNS => "No.  Length[m]  Q[m3/h]  ID[mm]  V[m/s]  t[s]  cum[min]",
        _ => return None,
    })
}
