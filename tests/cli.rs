//! 명령행 인자 해석과 출력 테스트.
use clap::Parser;
use lateral_design_toolbox::app::{self, AppError, SizeRequest};
use lateral_design_toolbox::cli::{Cli, Command};
use lateral_design_toolbox::config::{Config, OutputFormat};
use lateral_design_toolbox::i18n::Translator;
use lateral_design_toolbox::lateral::PairPolicy;
use lateral_design_toolbox::ui_cli::{
    parse_menu_choice, read_f64_from, read_line_from, read_menu_choice, MenuChoice,
};
use lateral_design_toolbox::units::FlowUnit;
use std::io::{self, Cursor};
use tracing::Level;

fn size_args(argv: &[&str]) -> lateral_design_toolbox::cli::SizeArgs {
    let cli = Cli::try_parse_from(argv.iter().copied()).expect("parse");
    match cli.command {
        Some(Command::Size(args)) => args,
        other => panic!("expected size command, got {other:?}"),
    }
}

#[test]
fn parses_size_command_with_defaults() {
    let args = size_args(&[
        "lateral_design_toolbox", "size", "-q", "20", "-s", "10", "-l", "200", "--head-loss", "10",
    ]);
    let req = SizeRequest::from_args(&args, &Config::default()).expect("request");
    assert_eq!(req.total_flow_m3_per_h, 20.0);
    assert_eq!(req.hazen_williams_c, 150.0);
    assert_eq!(req.catalog_code, "PVC-SDR41");
    assert_eq!(req.diameters_mm.len(), 10);
    assert_eq!(req.options.pair_policy, PairPolicy::Adjacent);
    assert_eq!(req.options.outlet_discharge_m3_per_h, None);
}

#[test]
fn explicit_diameters_units_and_policy() {
    let args = size_args(&[
        "lateral_design_toolbox",
        "size",
        "-q",
        "5",
        "--flow-unit",
        "lps",
        "-s",
        "10",
        "-l",
        "200",
        "--head-loss",
        "10",
        "--diameters",
        "45.9,57.38,84.58",
        "--pairs",
        "any",
        "--hazen-c",
        "140",
    ]);
    assert_eq!(args.flow_unit, Some(FlowUnit::LiterPerSecond));
    let req = SizeRequest::from_args(&args, &Config::default()).expect("request");
    assert!((req.total_flow_m3_per_h - 18.0).abs() < 1e-12);
    assert_eq!(req.diameters_mm, vec![45.9, 57.38, 84.58]);
    assert_eq!(req.catalog_code, "custom");
    assert_eq!(req.options.pair_policy, PairPolicy::AnyDescending);
    assert_eq!(req.hazen_williams_c, 140.0);
}

#[test]
fn catalog_and_diameters_conflict() {
    let res = Cli::try_parse_from([
        "lateral_design_toolbox",
        "size",
        "-q",
        "20",
        "-s",
        "10",
        "-l",
        "200",
        "--head-loss",
        "10",
        "--catalog",
        "PVC-SDR26",
        "--diameters",
        "45.9,57.38",
    ]);
    assert!(res.is_err());
}

#[test]
fn global_flags_and_default_command() {
    let cli = Cli::try_parse_from(["lateral_design_toolbox", "--log-level", "debug", "-L", "ko"])
        .expect("parse");
    assert!(cli.command.is_none());
    assert_eq!(cli.level(), Level::DEBUG);
    assert_eq!(cli.lang, "ko");

    let cli = Cli::try_parse_from(["lateral_design_toolbox", "--log-level", "loud", "catalogs"])
        .expect("parse");
    assert_eq!(cli.level(), Level::WARN);
    assert!(matches!(cli.command, Some(Command::Catalogs)));
}

#[test]
fn run_size_renders_text_and_json() {
    let args = size_args(&[
        "lateral_design_toolbox", "size", "-q", "20", "-s", "10", "-l", "200", "--head-loss", "10",
    ]);
    let tr = Translator::new("en");
    let text = app::run_size(&args, &Config::default(), &tr).expect("text");
    assert!(text.contains("Lateral Design Result"));
    assert!(text.contains("Inner diameter [mm]: 57.38"));
    assert!(text.contains("Segment table (two diameters)"));

    let mut cfg = Config::default();
    cfg.output = OutputFormat::Json;
    let json = app::run_size(&args, &cfg, &tr).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["geometry"]["outlet_count"], 20);
    assert_eq!(value["single_diameter_solution"]["diameter_mm"], 57.38);
    assert_eq!(value["two_diameter_segments"]["rows"].as_array().map(Vec::len), Some(20));
}

#[test]
fn no_solution_renders_warning() {
    let args = size_args(&[
        "lateral_design_toolbox", "size", "-q", "2000", "-s", "10", "-l", "200", "--head-loss", "10",
    ]);
    let text = app::run_size(&args, &Config::default(), &Translator::new("en")).expect("text");
    assert!(text.contains("Warning: no single diameter meets the constraints."));
    assert!(text.contains("Warning: no two-diameter combination meets the constraints."));

    let ko = app::run_size(&args, &Config::default(), &Translator::new("ko")).expect("text");
    assert!(ko.contains("경고: 조건을 만족하는 단일 관경이 없습니다."));
}

#[test]
fn unknown_catalog_is_an_error() {
    let args = size_args(&[
        "lateral_design_toolbox", "size", "-q", "20", "-s", "10", "-l", "200", "--head-loss", "10",
        "--catalog", "steel",
    ]);
    assert!(SizeRequest::from_args(&args, &Config::default()).is_err());
}

#[test]
fn catalog_listing_includes_custom_entries() {
    let cfg = Config::from_toml_str(
        r#"
[[catalogs]]
code = "PE-16"
diameters_mm = [13.6, 17.0]
"#,
    )
    .expect("cfg");
    let listing = app::list_catalogs(&cfg, &Translator::new("en"));
    assert!(listing.contains("PVC-SDR41"));
    assert!(listing.contains("PE-16"));
    assert!(listing.contains("13.6, 17"));
}

#[test]
fn menu_choices() {
    assert_eq!(parse_menu_choice(" 1\n"), Some(MenuChoice::LateralSizing));
    assert_eq!(parse_menu_choice("0"), Some(MenuChoice::Exit));
    assert_eq!(parse_menu_choice("9"), None);
}

#[test]
fn language_resolution_and_fallback() {
    use lateral_design_toolbox::i18n::{self, keys, Language};

    assert_eq!(i18n::resolve_language("ko", Some("en")), "ko");
    assert_eq!(i18n::resolve_language("auto", Some("en_US")), "en");
    assert_eq!(Translator::new("ko-KR").language(), Language::Ko);
    assert_eq!(Translator::new("fr").language(), Language::En);
    assert_eq!(Translator::new("en").t(keys::REPORT_MEETS_YES), "yes");
    assert_eq!(Translator::new("en").t("no.such.key"), "[missing translation]");
}

fn is_eof(err: &AppError) -> bool {
    matches!(err, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

#[test]
fn end_of_input_stops_prompts() {
    let tr = Translator::new("en");

    let err = read_line_from(&mut io::empty()).expect_err("eof");
    assert!(is_eof(&err), "{err:?}");

    let err = read_menu_choice(&tr, &mut Cursor::new("x\n9\n")).expect_err("menu eof");
    assert!(is_eof(&err), "{err:?}");

    let err = read_f64_from(&tr, &mut Cursor::new("abc\n"), "Q: ").expect_err("number eof");
    assert!(is_eof(&err), "{err:?}");
}

#[test]
fn prompts_retry_until_valid_input() {
    let tr = Translator::new("en");
    let choice = read_menu_choice(&tr, &mut Cursor::new("x\n2\n")).expect("menu");
    assert_eq!(choice, MenuChoice::Catalogs);
    let value = read_f64_from(&tr, &mut Cursor::new("abc\n12.5\n"), "Q: ").expect("number");
    assert_eq!(value, 12.5);
    assert_eq!(read_line_from(&mut Cursor::new("\n")).expect("blank"), "\n");
}
