use crate::error::{Error, Result};
use crate::form::FormHost;
use crate::options::Options;
use crate::ui::model::{Model, initial_model};
use crate::ui::{ClickTarget, Msg};
use bubbletea_rs::{
    Program, command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel,
    window_size,
};
use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::OnceCell;
use tracing::info;

// `TeaModel::init` takes no arguments, so the options are parked here before the program starts.
static OPTIONS: OnceCell<Options> = OnceCell::new();

/// Form host of the interactive session: logs what the form would receive.
struct LogHost;

impl FormHost for LogHost {
    fn on_change(&mut self, value: &str) {
        info!(value, "form value changed");
    }

    fn on_touched(&mut self) {
        info!("form control touched");
    }
}

// Adapter type implementing bubbletea-rs Model trait by delegating to our Model
struct TeaAdapter {
    inner: Model,
}

impl TeaAdapter {
    fn toggle_focus(&mut self) {
        if self.inner.has_focus {
            self.inner.update(Msg::Blur);
            self.inner.update(Msg::Click(ClickTarget::Outside));
        } else {
            self.inner.update(Msg::Focus);
        }
    }
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let options = OPTIONS.get().cloned().unwrap_or_default();
        let mut inner = initial_model(&options);
        inner.attach_host(Box::new(LogHost));
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        inner.update(Msg::WindowSize {
            width: width as usize,
            height: height as usize,
        });
        inner.update(Msg::Focus);
        (TeaAdapter { inner }, Some(window_size()))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            let ctrl = km.modifiers.contains(KeyModifiers::CONTROL);
            match &km.key {
                KeyCode::Char('c' | 'C') if ctrl => return Some(bubbletea_rs::quit()),
                KeyCode::Char('\u{03}') => return Some(bubbletea_rs::quit()),
                // Esc closes an open panel first, then quits.
                KeyCode::Esc => {
                    if !self.inner.is_open() {
                        return Some(bubbletea_rs::quit());
                    }
                    self.inner.update(Msg::KeyEsc);
                }
                // Enter picks from an open panel, otherwise submits the value.
                KeyCode::Enter => {
                    if !self.inner.is_open() {
                        return Some(bubbletea_rs::quit());
                    }
                    self.inner.update(Msg::KeyEnter);
                }
                KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
                KeyCode::Backspace => self.inner.update(Msg::KeyBackspace),
                KeyCode::Up => self.inner.update(Msg::KeyUp),
                KeyCode::Down => self.inner.update(Msg::KeyDown),
                KeyCode::Char(ch) => {
                    if ctrl {
                        match ch {
                            'n' | 'N' => self.inner.update(Msg::KeyDown),
                            'p' | 'P' => self.inner.update(Msg::KeyUp),
                            _ => {}
                        }
                    } else if self.inner.has_focus {
                        self.inner.update(Msg::Rune(*ch));
                    }
                }
                _ => {}
            }
            return None;
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            self.inner.update(Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
            return None;
        }
        None
    }

    fn view(&self) -> String {
        self.inner.render_full()
    }
}

/// Run the control interactively and return the value it held on exit.
pub async fn run(options: Options) -> Result<String> {
    if OPTIONS.set(options).is_err() {
        return Err(Error::Terminal("interactive session already started".to_string()));
    }
    let builder = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true);
    let program = builder
        .build()
        .map_err(|e| Error::Terminal(format!("failed to build program: {e:?}")))?;
    let mut final_adapter = program
        .run()
        .await
        .map_err(|e| Error::Terminal(format!("program error: {e:?}")))?;
    let value = final_adapter.inner.value().to_string();
    final_adapter.inner.destroy();
    Ok(value)
}
