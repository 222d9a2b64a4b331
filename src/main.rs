use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use rental_decision_toolbox::finance::rent_vs_buy::{self, CostModelInput};
use rental_decision_toolbox::{app, config, i18n};

/// 장비 렌탈/구매 의사결정 CLI.
#[derive(Debug, Parser)]
#[command(name = "rental_decision_toolbox_cli", version)]
struct Cli {
    /// 언어 코드 (auto/ko-kr/en-us)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 렌트/구매 비교 입력(JSON 파일)을 일괄 실행하고 결과를 JSON으로 출력한다.
    #[arg(long)]
    input: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    if let Some(path) = cli.input {
        run_batch(&path)?;
        return Ok(());
    }

    app::run(&mut cfg, &tr)?;
    Ok(())
}

/// JSON 파일의 입력을 계산해 결과를 표준 출력으로 내보낸다.
fn run_batch(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let input: CostModelInput = serde_json::from_str(&content)?;
    let output = rent_vs_buy::compute(&input)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
