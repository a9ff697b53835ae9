use std::io::{self, BufRead};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use chrono::Local;
use deck_core::{update, AppState, AppViewModel, Msg, Page};
use deck_engine::EngineHandle;
use deck_logging::{deck_debug, deck_info};

use super::config::DeckConfig;
use super::effects::EffectRunner;
use super::input::{parse_input, Input, HELP};
use super::ui;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_app(config: DeckConfig, start_page: Page) -> anyhow::Result<()> {
    let engine = EngineHandle::new(config.engine_config()).context("starting fetch engine")?;
    let (input_tx, input_rx) = mpsc::channel::<Input>();
    spawn_stdin_reader(input_tx)?;

    let mut app = App {
        state: AppState::with_settings(config.core_settings()),
        runner: EffectRunner::new(engine),
    };

    println!("{HELP}");
    app.dispatch(Msg::PageOpened(start_page));

    let mut last_tick = Instant::now();
    loop {
        match input_rx.recv_timeout(TICK_INTERVAL) {
            Ok(Input::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Ok(Input::Help) => println!("{HELP}"),
            Ok(Input::Messages(messages)) => {
                for msg in messages {
                    app.dispatch(msg);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
        }

        for msg in app.runner.drain_events() {
            app.dispatch(msg);
        }

        let now = Instant::now();
        app.dispatch(Msg::Tick(now - last_tick));
        last_tick = now;
    }

    deck_info!("Leaving fetchdeck");
    Ok(())
}

struct App {
    state: AppState,
    runner: EffectRunner,
}

impl App {
    fn dispatch(&mut self, msg: Msg) {
        if !matches!(msg, Msg::Tick(_)) {
            deck_debug!("Dispatch {:?}", msg);
        }
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let alerts = self.runner.run(effects);
        let view = state.consume_dirty().then(|| state.view());
        self.state = state;

        for alert in alerts {
            println!("! {alert}");
        }
        if let Some(view) = view {
            present(&view);
        }
    }
}

fn present(view: &AppViewModel) {
    println!();
    println!("-- {} --", Local::now().format("%H:%M:%S"));
    for line in ui::render::render(view) {
        println!("{line}");
    }
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<Input>) -> anyhow::Result<()> {
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                match parse_input(&line) {
                    Ok(input) => {
                        let quit = input == Input::Quit;
                        if input_tx.send(input).is_err() || quit {
                            break;
                        }
                    }
                    Err(message) => eprintln!("{message}"),
                }
            }
        })
        .context("spawning stdin reader")?;
    Ok(())
}
