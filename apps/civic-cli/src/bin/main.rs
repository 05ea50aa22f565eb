use std::env;

use tokio_util::sync::CancellationToken;

use civic_cli::{init_tracing, validate_catalog, App, Command};
use civic_core::config::Config;

fn parse_args() -> (bool, Vec<String>) {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let before = args.len();
    args.retain(|a| a != "--json");
    (args.len() != before, args)
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let (json, args) = parse_args();
    let command = Command::parse(args)?;
    if let Command::Validate { path: Some(path) } = &command {
        println!("{}", validate_catalog(path)?);
        return Ok(());
    }
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let app = App::from_config(&config)?;

    let cancel = CancellationToken::new();
    let out = tokio::runtime::Runtime::new()?.block_on(async {
        let guard = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() { guard.cancel(); }
        });
        app.run(&command, json, &cancel).await
    })?;
    println!("{out}");
    Ok(())
}
