use clap::error::ErrorKind;
use clap::Parser;
use zone2tf::config::cli::USAGE;
use zone2tf::utils::error::ErrorCategory;
use zone2tf::utils::logger;
use zone2tf::{open_sink, CliConfig, EtlEngine, ReaderSource, ZonePipeline};

const EXIT_FAILURE: i32 = 1;

fn main() {
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            println!("{}", USAGE);
            eprintln!("{}", e.render());
            std::process::exit(EXIT_FAILURE);
        }
    };

    logger::init_cli_logger(cli.verbose, cli.log_json);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!("Conversion failed: {} (Category: {:?})", e, e.category());

        if e.category() == ErrorCategory::Usage {
            println!("{}", USAGE);
        }
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(EXIT_FAILURE);
    }
}

fn run(cli: &CliConfig) -> zone2tf::Result<()> {
    let config = cli.run_config()?;
    tracing::info!("Converting zone {} ({:?})", config.zone.domain, config.mode);

    let sink = open_sink(cli.output.as_deref());
    let summary = match &cli.input {
        Some(path) => {
            let pipeline = ZonePipeline::new(ReaderSource::file(path)?, sink, config);
            EtlEngine::new(pipeline).run()?
        }
        None => {
            let pipeline = ZonePipeline::new(ReaderSource::stdin(), sink, config);
            EtlEngine::new(pipeline).run()?
        }
    };

    tracing::debug!("Run summary: {:?}", summary);
    Ok(())
}
