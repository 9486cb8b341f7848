use clap::Parser;
use numpad::App;
use numpad::cli::Cli;
use numpad::config::NumpadConfig;
use numpad::runtime::Runtime;
use numpad::terminal::{Terminal, TerminalSize};
use numpad::ui::frame_json::frame_to_json;
use numpad::ui::renderer::Renderer;
use std::error::Error;
use std::fs::File;

const SNAPSHOT_SIZE: TerminalSize = TerminalSize {
    width: 80,
    height: 24,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging()?;

    let config = match cli.config {
        Some(path) => NumpadConfig::load(&path)?,
        None => NumpadConfig::default(),
    };
    let mut app = App::from_config(&config);

    if cli.snapshot {
        app.focus(0);
        let frame = Renderer::render(&app, SNAPSHOT_SIZE);
        let json = frame_to_json(&frame, SNAPSHOT_SIZE);
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    let mut runtime = Runtime::new(app, Terminal::new()?);
    runtime.run()?;
    for field in runtime.into_app().fields() {
        println!("{} = {}", field.id(), field.text());
    }
    Ok(())
}

/// Raw mode owns the terminal, so logs only go to the file named by
/// `NUMPAD_LOG`.
fn init_logging() -> std::io::Result<()> {
    let Some(path) = std::env::var_os("NUMPAD_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
