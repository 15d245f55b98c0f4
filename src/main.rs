use pwcheck::app::App;
use pwcheck::cli::{parse_args, run_cli_command};
use pwcheck::client::CheckClient;
use pwcheck::config::CheckerConfig;
use pwcheck::terminal::{setup_panic_hook, TerminalManager};
use pwcheck::{logging, ui};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Loop tick, ~60fps
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    color_eyre::install()?;

    let options = run_cli_command(parse_args(std::env::args())?);

    let config = options.apply(CheckerConfig::from_env()?);
    config.validate()?;

    // Logging failures are not fatal; the UI still works without a log file
    let log_path = logging::init(options.log_directive());

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config, log_path))
}

async fn run(config: CheckerConfig, log_path: Result<PathBuf>) -> Result<()> {
    match &log_path {
        Ok(path) => info!(
            version = pwcheck::cli::VERSION,
            log = %path.display(),
            "pwcheck starting"
        ),
        Err(e) => eprintln!("warning: logging disabled: {}", e),
    }
    info!(
        endpoint = %config.endpoint,
        strength_ms = config.strength_delay.as_millis() as u64,
        breach_ms = config.breach_delay.as_millis() as u64,
        ordering = %config.ordering,
        "checker configured"
    );

    let client = CheckClient::from_config(&config)?;
    let mut app = App::new(&config, Arc::new(client));

    let mut term_manager = TerminalManager::new()?;
    let result = run_app(term_manager.terminal(), &mut app).await;
    term_manager.restore()?;

    info!("pwcheck exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if !app.handle_key(key) {
                            debug!(code = ?key.code, "unbound key");
                        }
                    }
                    Some(Ok(Event::Paste(text))) => app.push_str(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    // Input stream closed
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
