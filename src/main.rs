use giftrend::adapters::{BrowserViewer, ReqwestHttpClient};
use giftrend::api::GiphyClient;
use giftrend::app::{App, AppMessage};
use giftrend::cli::{parse_args, CliCommand, USAGE, VERSION};
use giftrend::config::GalleryConfig;
use giftrend::logging;
use giftrend::state::GalleryState;
use giftrend::storage::SnapshotStore;
use giftrend::terminal::{setup_panic_hook, TerminalManager};
use giftrend::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Spinner animation interval
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Informational flags run before any initialization
    let fresh = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("giftrend {}", VERSION);
            return Ok(());
        }
        CliCommand::Help => {
            print!("{}", USAGE);
            return Ok(());
        }
        CliCommand::ClearState => return clear_state(),
        CliCommand::Run { fresh } => fresh,
    };

    color_eyre::install()?;

    let config = match GalleryConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Logging is best-effort; the TUI still works without a log file
    match config.resolved_log_path() {
        Ok(path) => {
            if let Err(e) = logging::init(&path) {
                eprintln!("Warning: logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }
    info!(version = VERSION, base_url = %config.base_url, page_size = config.page_size, "Starting giftrend");

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    let store = match config.resolved_state_path() {
        Ok(path) => Some(SnapshotStore::new(path)),
        Err(e) => {
            warn!(error = %e, "No location for the gallery snapshot; it will not be saved");
            None
        }
    };

    let gallery = match store.as_ref().filter(|_| !fresh) {
        Some(store) => match store.load_or_default() {
            Some(snapshot) => {
                info!(items = snapshot.data.len(), offset = snapshot.offset, "Restored gallery snapshot");
                GalleryState::restore(snapshot, config.page_size)
            }
            None => GalleryState::new(config.page_size),
        },
        None => GalleryState::new(config.page_size),
    };

    let client = GiphyClient::new(ReqwestHttpClient::new(), &config);
    let mut app = App::new(client, Arc::new(BrowserViewer), gallery);

    let mut term = TerminalManager::new()?;
    let size = term.terminal().size()?;

    let result = runtime.block_on(async {
        // May spawn a page request, so it runs on the runtime
        app.update_terminal_dimensions(size.width, size.height);
        app.start();
        run_app(term.terminal(), &mut app).await
    });

    term.restore();

    if let Some(store) = &store {
        if let Err(e) = store.save(&app.gallery.snapshot()) {
            warn!(error = %e, "Failed to save gallery snapshot");
        }
    }
    info!("Exiting giftrend");

    result
}

/// Handle `--clear-state` without entering the TUI.
fn clear_state() -> Result<()> {
    let path = match GalleryConfig::state_path_from_env() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    SnapshotStore::new(&path).clear()?;
    println!("Cleared saved gallery at {}", path.display());
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    let mut ticker = tokio::time::interval(TICK_INTERVAL);

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &*app);
            })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!(error = %e, "Terminal event stream error");
                    }
                    // Input closed; nothing more can drive the app
                    None => return Ok(()),
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
