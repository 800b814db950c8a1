use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use slimflix_core::{update, AppState, Effect, Msg};
use slimflix_logging::{ui_debug, ui_info};

use super::config::AppConfig;
use super::console::{self, ConsoleCommand};
use super::effects::EffectRunner;
use super::ui::layout;
use super::ui::page::Page;
use super::ui::render;

/// Everything the main loop reacts to.
pub enum AppInput {
    Dispatch(Msg),
    ShowPage,
    Quit,
}

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let media_type = config.list_media_type()?;
    let (input_tx, input_rx) = mpsc::channel::<AppInput>();
    let runner = EffectRunner::new(&config.client_settings(), input_tx.clone())
        .context("start backend client")?;

    let mut app = App::new(
        AppState::with_notification_delay(config.notification_delay()),
        layout::page_template(),
    );
    for msg in layout::bootstrap(app.page(), media_type, config.available_limit) {
        runner.enqueue(app.dispatch(msg));
    }
    print_page(app.page());

    spawn_console(input_tx);

    while let Ok(input) = input_rx.recv() {
        match input {
            AppInput::Dispatch(msg) => {
                let rendered_before = app.renders();
                runner.enqueue(app.dispatch(msg));
                if app.renders() != rendered_before {
                    print_page(app.page());
                }
            }
            AppInput::ShowPage => print_page(app.page()),
            AppInput::Quit => break,
        }
    }

    ui_info!("Shutting down");
    Ok(())
}

/// Owns the widget state and the page it renders into.
pub struct App {
    state: AppState,
    page: Page,
    renders: u64,
}

impl App {
    pub fn new(state: AppState, page: Page) -> Self {
        Self {
            state,
            page,
            renders: 0,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    #[cfg(test)]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Runs one message through the reducer, re-renders the page if the state
    /// changed, and hands back the effects to execute.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        if let Some((widget, token)) = self.state.stale_settlement(&msg) {
            ui_debug!(widget = widget; "Discarding stale response token={}", token);
        }
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            for command in render::render(&state.view()) {
                self.page.apply(command);
            }
            self.renders += 1;
        }
        self.state = state;
        effects
    }
}

fn spawn_console(input_tx: mpsc::Sender<AppInput>) {
    thread::spawn(move || {
        println!("{}", console::HELP);
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            let inputs = match console::parse_line(&line) {
                Ok(ConsoleCommand::Dispatch(msgs)) => {
                    msgs.into_iter().map(AppInput::Dispatch).collect()
                }
                Ok(ConsoleCommand::Show) => vec![AppInput::ShowPage],
                Ok(ConsoleCommand::Help) => {
                    println!("{}", console::HELP);
                    Vec::new()
                }
                Ok(ConsoleCommand::Quit) => vec![AppInput::Quit],
                Err(err) => {
                    println!("{err}");
                    Vec::new()
                }
            };
            for input in inputs {
                if input_tx.send(input).is_err() {
                    return;
                }
            }
        }
        ui_debug!("Console input closed");
        let _ = input_tx.send(AppInput::Quit);
    });
}

fn print_page(page: &Page) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "----");
    let _ = write!(stdout, "{}", page.render_text());
    let _ = stdout.flush();
}
