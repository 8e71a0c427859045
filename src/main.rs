//! Salesman - A terminal travelling salesman solver.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use salesman::app::{App, Mode};
use salesman::config::{AppConfig, DEFAULT_DATA_FILE, DEFAULT_OUTPUTS_DIR};
use salesman::domain::{cities_from_points, PointGenerator, DEFAULT_MAX_COORDINATE};
use salesman::solver::{create_solver, Algorithm, SolveControl};
use salesman::storage::{read_points, write_points, SolutionArchiver};
use salesman::transcript::Transcript;
use salesman::ui;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "salesman")]
#[command(about = "A terminal travelling salesman solver", long_about = None)]
struct Args {
    /// Point file used by load, save and the batch commands
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Base directory for archived runs
    #[arg(long, default_value = DEFAULT_OUTPUTS_DIR)]
    outputs: PathBuf,

    /// Seed point generation and the ant colony for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate random points and write them to the data file
    Generate {
        /// Number of points
        #[arg(long)]
        count: usize,

        /// Exclusive upper bound for coordinates
        #[arg(long, default_value_t = DEFAULT_MAX_COORDINATE)]
        max_coordinate: i32,
    },
    /// Solve the points in the data file and print the tour
    Solve {
        /// Solving strategy
        #[arg(long, value_enum, default_value_t)]
        algorithm: Algorithm,

        /// Archive the result under the outputs directory
        #[arg(long)]
        save: bool,
    },
}

fn init_logging(log_path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        init_logging(log_path)?;
        tracing::info!("Starting Salesman");
    }

    let config = AppConfig {
        data_file: args.data,
        outputs_dir: args.outputs,
        seed: args.seed,
        ..AppConfig::default()
    };

    let result = match args.command {
        Some(Command::Generate {
            count,
            max_coordinate,
        }) => run_generate(&config, count, max_coordinate),
        Some(Command::Solve { algorithm, save }) => run_solve(&config, algorithm, save),
        None => run_tui(config),
    };

    if args.log.is_some() {
        tracing::info!("Salesman exited");
    }

    result
}

fn run_generate(config: &AppConfig, count: usize, max_coordinate: i32) -> Result<()> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut generator = PointGenerator::with_rng(rng, max_coordinate)?;
    let points = if count == 0 {
        generator.generate_any()
    } else {
        generator.generate(count)?
    };
    write_points(&config.data_file, &points)?;

    let mut transcript = Transcript::echoing();
    transcript.success(&format!("Generated and saved {} cities.", points.len()));
    Ok(())
}

fn run_solve(config: &AppConfig, algorithm: Algorithm, save: bool) -> Result<()> {
    let points = read_points(&config.data_file)?;
    if points.is_empty() {
        bail!("File is empty.");
    }

    let mut transcript = Transcript::echoing();
    transcript.success(&format!("Loaded {} points.", points.len()));
    transcript.header(&format!("Running {}", algorithm.name()));

    let colony = salesman::config::ColonyConfig {
        seed: config.seed,
        ..config.colony.clone()
    };
    let report = create_solver(algorithm, &colony)
        .solve(&cities_from_points(&points), &SolveControl::new())?;

    transcript.header("Result");
    transcript.println(report.tour.to_string());
    transcript.println(format!(
        "Iterations: {} ({})",
        report.iterations,
        report.stop_reason.describe()
    ));
    transcript.println(format!("Time: {}", ui::format_elapsed(report.elapsed)));

    if save {
        let archiver = SolutionArchiver::new(&config.outputs_dir);
        let dir = archiver.archive(algorithm.name(), &report.tour, &transcript.to_text())?;
        let shown = std::fs::canonicalize(&dir).unwrap_or(dir);
        transcript.success(&format!("Saved to: {}", shown.display()));
    }
    Ok(())
}

fn run_tui(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(config);
    let res = run_app(&mut terminal, app);

    // Restore terminal before reporting anything
    let restored = restore_terminal(&mut terminal);
    tui_result(res, restored)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// A failure inside the app takes precedence over one while restoring the terminal.
fn tui_result(run: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(err) = &run {
        tracing::error!("TUI failed: {}", err);
    }
    if let Err(err) = &restored {
        tracing::error!("Failed to restore terminal: {}", err);
    }
    run?;
    restored
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.poll_solver();
        terminal.draw(|f| ui::draw(f, &app))?;

        if app.should_exit() {
            return Ok(());
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.mode {
            // Solving - only cancellation is accepted
            Mode::Solving => {
                if key.code == KeyCode::Esc {
                    app.cancel_solve();
                }
            },

            // Numeric prompt
            Mode::Prompt(_) => match key.code {
                KeyCode::Enter => app.submit_prompt(),
                KeyCode::Esc => app.cancel_dialog(),
                KeyCode::Backspace => app.prompt_backspace(),
                KeyCode::Char(c) => app.prompt_input(c),
                _ => {},
            },

            // Algorithm chooser
            Mode::ChooseAlgorithm(_) => match (key.modifiers, key.code) {
                (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                    app.chooser_move(false);
                },
                (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                    app.chooser_move(true);
                },
                (KeyModifiers::NONE, KeyCode::Enter) => app.chooser_confirm(),
                (KeyModifiers::NONE, KeyCode::Char(c)) if c.is_ascii_digit() => {
                    app.select_algorithm(i64::from(c as u8 - b'0'));
                },
                (_, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('q')) => {
                    app.cancel_dialog();
                },
                _ => {},
            },

            // Main menu
            Mode::Menu => match (key.modifiers, key.code) {
                // Quit
                (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                // Navigation
                (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                    app.menu.cursor_up();
                },
                (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                    app.menu.cursor_down();
                },
                (KeyModifiers::NONE, KeyCode::Enter) => app.activate_current(),
                (KeyModifiers::NONE, KeyCode::Char(c)) if c.is_ascii_digit() => {
                    app.choose(i64::from(c as u8 - b'0'));
                },

                // Features
                (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
                (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_tour(),
                (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                    app.status = "Help: q=quit, j/k=nav, Enter=select, 1-7=choose, y=copy tour, T=theme".to_string();
                },

                _ => {},
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn tui_failure_is_returned() {
        let err = tui_result(Err(anyhow!("draw failed")), Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "draw failed");
    }

    #[test]
    fn app_failure_wins_over_restore_failure() {
        let err = tui_result(Err(anyhow!("draw failed")), Err(anyhow!("tty gone"))).unwrap_err();
        assert_eq!(err.to_string(), "draw failed");
    }

    #[test]
    fn restore_failure_is_returned_after_clean_run() {
        let err = tui_result(Ok(()), Err(anyhow!("tty gone"))).unwrap_err();
        assert_eq!(err.to_string(), "tty gone");
        assert!(tui_result(Ok(()), Ok(())).is_ok());
    }
}
