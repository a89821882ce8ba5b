use clap::Parser;
use lateral_design_toolbox::cli::{Cli, Command};
use lateral_design_toolbox::{app, config, i18n};
use tracing_subscriber::FmtSubscriber;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cfg_path = config::config_path(cli.config.as_deref());
    let mut cfg = config::load_from(&cfg_path)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cli.locales.as_deref());

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Size(args) => println!("{}", app::run_size(&args, &cfg, &tr)?),
        Command::Catalogs => println!("{}", app::list_catalogs(&cfg, &tr)),
        Command::Interactive => app::run(&mut cfg, &cfg_path, &tr)?,
    }
    Ok(())
}
