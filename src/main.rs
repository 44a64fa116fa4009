use clap::Parser;
use msisdn_fmt::utils::{logger, validation::Validate};
use msisdn_fmt::{render, BatchFormatter, CliConfig, Result};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Formatting failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = e.severity().exit_code();

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> Result<()> {
    let settings = config.settings()?;
    tracing::info!(
        "Formatting as {} with country code '{}'",
        settings.format,
        settings.country_code
    );

    let numbers = config.collect_numbers()?;
    let batch = BatchFormatter::new(settings.format, settings.country_code.clone());
    let report = batch.format_all(&numbers);

    let rendered = render(&report, settings.output)?;
    println!("{}", rendered);

    report.ensure_complete()
}
