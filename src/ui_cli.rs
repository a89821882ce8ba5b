use std::io::{self, BufRead, Write};

use crate::app::{self, AppError, PromptValues};
use crate::catalog;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::lateral::PairPolicy;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LateralSizing,
    Catalogs,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_LATERAL));
    println!("{}", tr.t(keys::MAIN_MENU_CATALOGS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    read_menu_choice(tr, &mut io::stdin().lock())
}

/// 올바른 메뉴 번호가 나올 때까지 읽는다. 입력이 끝나면 오류를 반환한다.
pub fn read_menu_choice<R: BufRead>(
    tr: &Translator,
    reader: &mut R,
) -> Result<MenuChoice, AppError> {
    loop {
        let sel = prompt_from(reader, tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 메뉴 번호 문자열을 선택지로 바꾼다.
pub fn parse_menu_choice(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::LateralSizing),
        "2" => Some(MenuChoice::Catalogs),
        "3" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 횡지관 사이징 메뉴를 처리한다.
pub fn handle_lateral_sizing(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::LATERAL_HEADING));
    println!("{}", tr.t(keys::LATERAL_HELP));
    let (q_unit, l_unit) = app::unit_symbols(cfg);
    let keep = tr.t(keys::PROMPT_KEEP_DEFAULT);

    let values = PromptValues {
        flow: read_f64(tr, &format!("{} [{q_unit}]: ", tr.t(keys::PROMPT_FLOW)))?,
        spacing: read_f64(tr, &format!("{} [{l_unit}]: ", tr.t(keys::PROMPT_SPACING)))?,
        length: read_f64(tr, &format!("{} [{l_unit}]: ", tr.t(keys::PROMPT_LENGTH)))?,
        head_loss: read_f64(tr, &format!("{} [{l_unit}]: ", tr.t(keys::PROMPT_HEAD_LOSS)))?,
        hazen_c: read_optional_f64(
            tr,
            &format!(
                "{} {keep} [{}]: ",
                tr.t(keys::PROMPT_HAZEN_C),
                cfg.design.hazen_williams_c
            ),
        )?,
        catalog: read_optional_text(&format!(
            "{} {keep} [{}]: ",
            tr.t(keys::PROMPT_CATALOG),
            cfg.design.catalog
        ))?,
    };

    let request = app::request_from_prompt(cfg, values)?;
    let result = request.execute()?;
    println!("{}", app::render(&result, cfg.output, tr)?);
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} lang={} C={} catalog={} pairs={:?} vmax={}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language,
        cfg.design.hazen_williams_c,
        cfg.design.catalog,
        cfg.design.pair_policy,
        cfg.design.max_velocity_m_per_s
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let changed = match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let code = read_line(tr.t(keys::PROMPT_LANGUAGE))?.trim().to_lowercase();
            if matches!(code.as_str(), "auto" | "ko" | "en") {
                cfg.language = code;
                true
            } else {
                false
            }
        }
        "2" => match read_positive(tr, &format!("{}: ", tr.t(keys::PROMPT_HAZEN_C)))? {
            Some(c) => {
                cfg.design.hazen_williams_c = c;
                true
            }
            None => false,
        },
        "3" => {
            let code = read_line(&format!("{}: ", tr.t(keys::PROMPT_CATALOG)))?;
            let code = code.trim();
            if catalog::resolve(code, &cfg.catalogs).is_ok() {
                cfg.design.catalog = code.to_string();
                true
            } else {
                false
            }
        }
        "4" => {
            let p = read_line(tr.t(keys::PROMPT_PAIR_POLICY))?;
            match p.trim() {
                "1" => {
                    cfg.design.pair_policy = PairPolicy::Adjacent;
                    true
                }
                "2" => {
                    cfg.design.pair_policy = PairPolicy::AnyDescending;
                    true
                }
                _ => false,
            }
        }
        "5" => match read_positive(tr, tr.t(keys::PROMPT_MAX_VELOCITY))? {
            Some(v) => {
                cfg.design.max_velocity_m_per_s = v;
                true
            }
            None => false,
        },
        _ => false,
    };
    if changed {
        println!("{}", tr.t(keys::SETTINGS_SAVED));
    } else {
        println!("{}", tr.t(keys::SETTINGS_INVALID));
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    prompt_from(&mut io::stdin().lock(), prompt)
}

fn prompt_from<R: BufRead>(reader: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    read_line_from(reader)
}

/// 한 줄을 읽는다. 입력 끝(0바이트)은 `UnexpectedEof` 입출력 오류로 바꾼다.
pub fn read_line_from<R: BufRead>(reader: &mut R) -> Result<String, AppError> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    read_f64_from(tr, &mut io::stdin().lock(), prompt)
}

/// 숫자가 나올 때까지 다시 묻는다.
pub fn read_f64_from<R: BufRead>(
    tr: &Translator,
    reader: &mut R,
    prompt: &str,
) -> Result<f64, AppError> {
    loop {
        let s = prompt_from(reader, prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 None을 반환한다.
fn read_optional_f64(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_optional_text(prompt: &str) -> Result<Option<String>, AppError> {
    let s = read_line(prompt)?;
    let s = s.trim();
    Ok((!s.is_empty()).then(|| s.to_string()))
}

/// 0보다 큰 값만 받는다. 그 외 입력은 None.
fn read_positive(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    Ok(read_optional_f64(tr, prompt)?.filter(|v| *v > 0.0 && v.is_finite()))
}
