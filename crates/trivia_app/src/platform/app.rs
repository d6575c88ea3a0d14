use std::io::BufRead;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use trivia_core::{update, AppState, Msg};
use trivia_gateway::GatewayHandle;
use trivia_logging::{trivia_info, trivia_warn};

use super::cli::Args;
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging;
use super::ui::input::{parse_command, Command, HELP};
use super::ui::render::render;

/// How long the loop waits for input before checking on the gateway again.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_app(args: Args) -> anyhow::Result<()> {
    let config = AppConfig::resolve(&args).context("loading configuration")?;
    logging::initialize(config.log);
    trivia_info!("Starting against {}", config.base_url);

    let gateway = GatewayHandle::new(&config.gateway_settings())
        .with_context(|| format!("connecting to {}", config.base_url))?;
    let runner = EffectRunner::new(gateway);

    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    trivia_warn!("Failed to read input: {}", err);
                    break;
                }
            }
        }
    });

    println!("{HELP}");
    let mut state = dispatch(AppState::new(), Msg::Mounted, &runner);

    loop {
        for msg in runner.drain_events() {
            state = dispatch(state, msg, &runner);
        }

        let line = match line_rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => line,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };
        match parse_command(&line, state.pending_delete().is_some()) {
            Ok(Command::Dispatch(msg)) => state = dispatch(state, msg, &runner),
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) => break,
            Err(err) => println!("{err}"),
        }
    }

    trivia_info!("Shutting down");
    Ok(())
}

/// Runs one message through the state machine, re-renders when something
/// changed and then executes the effects.
fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (mut state, effects) = update(state, msg);
    if state.consume_dirty() {
        let view = state.view();
        print!("{}", render(&view));
        if view.notice.is_some() {
            // Shown once; the next render should not repeat it.
            let (dismissed, _) = update(state, Msg::NoticeDismissed);
            state = dismissed;
            state.consume_dirty();
        }
    }
    runner.enqueue(effects);
    state
}
