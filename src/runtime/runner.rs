use crate::app::App;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::renderer::Renderer;
use std::io;
use std::time::Duration;

const POLL_TIMEOUT: Duration = Duration::from_millis(120);

pub struct Runtime {
    app: App,
    terminal: Terminal,
}

impl Runtime {
    pub fn new(app: App, terminal: Terminal) -> Self {
        Self { app, terminal }
    }

    pub fn into_app(self) -> App {
        self.app
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;
        log::info!("runtime started at {:?}", self.terminal.size());

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.app.should_exit() {
                let event = self.terminal.poll_event(POLL_TIMEOUT)?;
                self.dispatch(event)?;
            }

            Ok(())
        })();

        let exit_result = self.terminal.exit();
        log::info!("runtime stopped");
        run_result.and(exit_result)
    }

    fn dispatch(&mut self, event: TerminalEvent) -> io::Result<()> {
        let dirty = match event {
            TerminalEvent::Resize(size) => {
                self.terminal.set_size(size);
                true
            }
            TerminalEvent::Key(key) => self.app.handle_key(key),
            TerminalEvent::Tap(pos) => self.app.handle_tap(pos, self.terminal.size()),
            TerminalEvent::Tick => false,
        };

        if self.app.take_keyboard_release() {
            self.terminal.hide_cursor()?;
        }
        if dirty {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = Renderer::render(&self.app, self.terminal.size());
        self.terminal.render_frame(&frame)
    }
}
