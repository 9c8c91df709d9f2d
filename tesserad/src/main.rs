use consensus_core::{params, select_params_from_flags};
use std::process;
use tesserad::{cli, ui, Config, NodeError, NodeSettings, ParamsSummary};
use tracing::{error, info};

fn main() {
    // Parse command line arguments
    let args = cli::parse_args();

    init_logging(&args);

    if let Err(e) = run(&args) {
        ui::print_status("✗", &e.to_string(), ui::StatusType::Error);
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: &cli::Args) -> Result<(), NodeError> {
    let mut config = match &args.config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_cli_overrides(args);

    if !select_params_from_flags(config.network_flags()) {
        return Err(NodeError::InvalidNetworkFlags);
    }
    let params = params();

    if args.dump_params {
        println!("{}", ParamsSummary::from(params).to_json()?);
        return Ok(());
    }

    ui::print_banner(env!("CARGO_PKG_VERSION"), &params.network().to_string());
    ui::print_params_summary(params);

    let settings = NodeSettings::derive(&config, params)?;
    settings.ensure_data_dir()?;
    ui::print_settings_summary(&settings);

    ui::print_status("✓", "Chain parameters selected, node bootstrap complete", ui::StatusType::Success);
    info!("Node bootstrap complete for {} (data dir {:?})", settings.network, settings.data_dir);
    Ok(())
}

fn init_logging(args: &cli::Args) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt().with_env_filter(filter).with_target(true).with_thread_ids(true).init();
}
