use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use civic_cli::session::{Reply, Session, HELP};
use civic_cli::{init_tracing, App};
use civic_core::config::Config;

fn prompt() -> std::io::Result<()> {
    print!("\n🔍 > ");
    std::io::stdout().flush()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let app = App::from_config(&config)?;
    let mut session = Session::new(&app);

    let cancel = CancellationToken::new();
    let guard = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() { guard.cancel(); }
    });

    println!("🏛️  Issue topic search ({} topics)", app.catalog().len());
    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;
        let line = tokio::select! {
            line = lines.next_line() => line?,
            () = cancel.cancelled() => None,
        };
        let Some(line) = line else { break };

        match session.handle_line(&app, &line, &cancel).await? {
            Reply::Text(text) => println!("{text}"),
            Reply::Quit(message) => {
                if let Some(message) = message { eprintln!("{message}"); }
                break;
            }
        }
    }
    println!("\n👋 Goodbye!");
    Ok(())
}
