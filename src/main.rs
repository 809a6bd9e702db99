use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use loadout::config::{Cli, Command, Config};
use loadout::constants::INPUT_POLL_MS;
use loadout::input::{process_checklist_input, ChecklistInput, ChecklistResult};
use loadout::ui::{undo_on_error, TuiRenderer};
use loadout::{build_info, logging};
use loadout::{FileStore, LoadoutManager, NullRenderer, TextRenderer};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", build_info::version_line());
        return;
    }

    if let Err(e) = run(cli) {
        eprintln!("loadout: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> loadout::Result<()> {
    let config = Config::resolve(&cli)?;
    logging::init(&config.data_dir, &config.log_filter);
    tracing::debug!(?config, "starting");

    let store = FileStore::open(&config.data_dir)?;
    let mut manager = LoadoutManager::new(store, config.preserve);

    let Some(command) = cli.command else {
        return run_tui(&mut manager);
    };

    let mut report = TextRenderer::new(io::stdout().lock());
    match command {
        Command::Status => manager.initialize(&mut report),
        Command::Check { zone, index } => {
            manager.initialize(&mut NullRenderer)?;
            manager.set_item_checked(&zone, index, true, &mut report)
        }
        Command::Uncheck { zone, index } => {
            manager.initialize(&mut NullRenderer)?;
            manager.set_item_checked(&zone, index, false, &mut report)
        }
        Command::Kit { kit } => {
            manager.initialize(&mut NullRenderer)?;
            manager.toggle_kit(&kit, &mut report).map(|_| ())
        }
        Command::Reset => {
            manager.initialize(&mut NullRenderer)?;
            manager.reset(&mut report)
        }
    }
}

fn run_tui(manager: &mut LoadoutManager<FileStore>) -> loadout::Result<()> {
    enable_raw_mode()?;
    let terminal = undo_on_error(
        || {
            let mut stdout = io::stdout();
            stdout.execute(EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        restore_terminal,
    )?;
    let mut tui = TuiRenderer::new(terminal);

    let result = event_loop(manager, &mut tui);

    // Restore the terminal even when the loop failed
    restore_terminal();
    tui.terminal_mut().show_cursor()?;
    result
}

/// Best effort: leave raw mode and the alternate screen.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!(error = %e, "could not disable raw mode");
    }
    if let Err(e) = io::stdout().execute(LeaveAlternateScreen) {
        tracing::warn!(error = %e, "could not leave alternate screen");
    }
}

fn event_loop(
    manager: &mut LoadoutManager<FileStore>,
    tui: &mut TuiRenderer<CrosstermBackend<io::Stdout>>,
) -> loadout::Result<()> {
    manager.initialize(tui)?;

    loop {
        if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let input = ChecklistInput::from_key(key.code);
                match process_checklist_input(input, manager, tui) {
                    ChecklistResult::Quit => break,
                    ChecklistResult::Continue | ChecklistResult::Failed(_) => {}
                }
            }
            Event::Resize(_, _) => tui.redraw()?,
            _ => {}
        }
    }
    Ok(())
}
