//! Application state and logic.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::clipboard;
use crate::config::{AppConfig, ColonyConfig, LayoutConfig};
use crate::domain::{cities_from_points, Point, PointGenerator};
use crate::error::{Result, SalesmanError};
use crate::menu::{Menu, MenuAction};
use crate::solver::{create_solver, Algorithm, SolveControl, SolveEvent, SolveReport};
use crate::storage::{FilePointRepository, PointRepository, SolutionArchiver};
use crate::transcript::Transcript;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// What a numeric prompt is collecting input for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    /// City count for "Generate random data".
    Generate,
    /// City count for "Generate and save data".
    GenerateAndSave,
}

/// Numeric input dialog state.
#[derive(Debug, Clone)]
pub struct PromptState {
    /// Pending action.
    pub purpose: PromptPurpose,
    /// Text typed so far.
    pub buffer: String,
    /// Validation message for the last submit.
    pub error: Option<String>,
}

impl PromptState {
    fn new(purpose: PromptPurpose) -> Self {
        Self {
            purpose,
            buffer: String::new(),
            error: None,
        }
    }

    /// Prompt label.
    pub fn label(&self) -> &'static str {
        "Enter number of cities (0 for random): "
    }
}

/// Interaction mode.
#[derive(Debug, Clone)]
pub enum Mode {
    /// Browsing the main menu.
    Menu,
    /// Typing a number.
    Prompt(PromptState),
    /// Picking an algorithm; holds the chooser cursor.
    ChooseAlgorithm(usize),
    /// A solver is running.
    Solving,
}

/// Latest progress of a running solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveProgress {
    /// Iterations completed.
    pub iteration: usize,
    /// Iteration cap.
    pub max_iterations: usize,
    /// Best length so far.
    pub best_length: f64,
}

impl SolveProgress {
    /// Completed fraction in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.max_iterations == 0 {
            return 0.0;
        }
        (self.iteration as f64 / self.max_iterations as f64).clamp(0.0, 1.0)
    }
}

/// A solve running on a worker thread.
#[derive(Debug)]
pub struct SolveJob {
    /// Algorithm being run.
    pub algorithm: Algorithm,
    /// Latest progress, if any arrived yet.
    pub progress: Option<SolveProgress>,
    control: SolveControl,
    events: Receiver<SolveEvent>,
}

/// Data the user is working on.
#[derive(Debug, Default)]
pub struct Session {
    /// Current problem points.
    pub points: Vec<Point>,
    /// Algorithm used by "Solve TSP".
    pub selected_algorithm: Algorithm,
    /// Most recent solve.
    pub last_report: Option<SolveReport>,
    /// Whether `last_report` was archived already.
    pub is_result_saved: bool,
    /// Exit requested.
    pub should_exit: bool,
}

/// Application state.
pub struct App {
    /// Session settings.
    pub config: AppConfig,
    /// Screen layout settings.
    pub layout: LayoutConfig,
    /// Main menu.
    pub menu: Menu,
    /// Interaction mode.
    pub mode: Mode,
    /// Working data.
    pub session: Session,
    /// Console log.
    pub transcript: Transcript,
    /// Running solve.
    pub job: Option<SolveJob>,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    repository: Box<dyn PointRepository>,
    archiver: SolutionArchiver,
    generator: PointGenerator,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("mode", &self.mode)
            .field("session", &self.session)
            .field("repository", &self.repository.location())
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Create a new application instance backed by the configured data file.
    pub fn new(config: AppConfig) -> Self {
        let repository = Box::new(FilePointRepository::new(config.data_file.clone()));
        Self::with_repository(config, repository)
    }

    /// Create an application instance with a custom point repository.
    pub fn with_repository(config: AppConfig, repository: Box<dyn PointRepository>) -> Self {
        let generator = config
            .seed
            .map(PointGenerator::seeded)
            .unwrap_or_default();
        let archiver = SolutionArchiver::new(config.outputs_dir.clone());

        let mut transcript = Transcript::new();
        transcript.welcome();

        Self {
            config,
            layout: LayoutConfig::default(),
            menu: Menu::main(),
            mode: Mode::Menu,
            session: Session::default(),
            transcript,
            job: None,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            repository,
            archiver,
            generator,
        }
    }

    /// Whether the main loop should stop.
    pub fn should_exit(&self) -> bool {
        self.session.should_exit
    }

    /// Run the action under the menu cursor.
    pub fn activate_current(&mut self) {
        if let Some(action) = self.menu.current() {
            self.transcript.input(&(self.menu.cursor() + 1).to_string());
            self.run_action(action);
        }
    }

    /// Run the action with a 1-based menu number.
    pub fn choose(&mut self, choice: i64) {
        self.transcript.input(&choice.to_string());
        match self.menu.choose(choice) {
            Some(action) => self.run_action(action),
            None => self.fail(&format!("Action failed: Invalid choice: {}", choice)),
        }
    }

    /// Dispatch a menu action.
    pub fn run_action(&mut self, action: MenuAction) {
        tracing::debug!("Menu action: {:?}", action);
        match action {
            MenuAction::LoadData => self.load_data(),
            MenuAction::GenerateData => self.open_prompt(PromptPurpose::Generate),
            MenuAction::GenerateAndSave => self.open_prompt(PromptPurpose::GenerateAndSave),
            MenuAction::ChooseAlgorithm => self.open_algorithm_chooser(),
            MenuAction::Solve => self.start_solve(),
            MenuAction::SaveOutputs => self.save_outputs(),
            MenuAction::Exit => {
                self.session.should_exit = true;
                self.status = "Bye".to_string();
            },
        }
    }

    fn succeed(&mut self, message: &str) {
        self.transcript.success(message);
        self.status = message.to_string();
    }

    fn fail(&mut self, message: &str) {
        self.transcript.error(message);
        self.status = message.to_string();
    }

    /// Load points from the data file.
    pub fn load_data(&mut self) {
        match self.repository.load_points() {
            Ok(points) if points.is_empty() => self.fail("File is empty."),
            Ok(points) => {
                let count = points.len();
                self.update_points(points);
                self.succeed(&format!("Loaded {} points.", count));
            },
            Err(e) => {
                tracing::error!("Load from {} failed: {}", self.repository.location(), e);
                self.fail(&format!("Load failed: {}", e));
            },
        }
    }

    fn open_prompt(&mut self, purpose: PromptPurpose) {
        self.mode = Mode::Prompt(PromptState::new(purpose));
        self.status = "Enter number of cities (0 for random)".to_string();
    }

    /// Add a character to the prompt buffer.
    pub fn prompt_input(&mut self, c: char) {
        if let Mode::Prompt(prompt) = &mut self.mode {
            if c.is_ascii_digit() || (c == '-' && prompt.buffer.is_empty()) {
                prompt.buffer.push(c);
                prompt.error = None;
            }
        }
    }

    /// Remove the last prompt character.
    pub fn prompt_backspace(&mut self) {
        if let Mode::Prompt(prompt) = &mut self.mode {
            prompt.buffer.pop();
        }
    }

    /// Close any dialog without acting.
    pub fn cancel_dialog(&mut self) {
        if matches!(self.mode, Mode::Prompt(_) | Mode::ChooseAlgorithm(_)) {
            self.mode = Mode::Menu;
            self.status = "Cancelled".to_string();
        }
    }

    /// Validate and act on the prompt buffer.
    pub fn submit_prompt(&mut self) {
        let Mode::Prompt(prompt) = &mut self.mode else {
            return;
        };
        let count: i64 = match prompt.buffer.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                prompt.error = Some("Invalid number. Try again.".to_string());
                prompt.buffer.clear();
                return;
            },
        };
        let purpose = prompt.purpose;
        self.mode = Mode::Menu;
        self.transcript.input(&count.to_string());

        match purpose {
            PromptPurpose::Generate => self.generate_data(count),
            PromptPurpose::GenerateAndSave => self.generate_and_save(count),
        }
    }

    fn generate(&mut self, count: i64) -> Result<Vec<Point>> {
        match usize::try_from(count) {
            Ok(n) if n > 0 => self.generator.generate(n),
            _ => Ok(self.generator.generate_any()),
        }
    }

    /// Generate random points; `count <= 0` picks a random count.
    pub fn generate_data(&mut self, count: i64) {
        match self.generate(count) {
            Ok(points) => {
                let n = points.len();
                self.update_points(points);
                self.succeed(&format!("Generated {} cities.", n));
            },
            Err(e) => self.fail(&format!("Action failed: {}", e)),
        }
    }

    /// Generate random points and write them to the data file.
    pub fn generate_and_save(&mut self, count: i64) {
        let points = match self.generate(count) {
            Ok(points) => points,
            Err(e) => return self.fail(&format!("Action failed: {}", e)),
        };
        match self.repository.save_points(&points) {
            Ok(()) => {
                let n = points.len();
                self.update_points(points);
                self.succeed(&format!("Generated and saved {} cities.", n));
            },
            Err(e) => {
                tracing::error!("Save to {} failed: {}", self.repository.location(), e);
                self.fail(&format!("Save failed: {}", e));
            },
        }
    }

    fn open_algorithm_chooser(&mut self) {
        self.transcript.header("Choose Algorithm");
        for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
            self.transcript.println(format!("  {}. {}", i + 1, algorithm.name()));
        }
        let cursor = Algorithm::ALL
            .iter()
            .position(|a| *a == self.session.selected_algorithm)
            .unwrap_or(0);
        self.mode = Mode::ChooseAlgorithm(cursor);
        self.status = "Select (1-2)".to_string();
    }

    /// Move the algorithm chooser cursor.
    pub fn chooser_move(&mut self, down: bool) {
        if let Mode::ChooseAlgorithm(cursor) = &mut self.mode {
            let len = Algorithm::ALL.len();
            *cursor = if down {
                (*cursor + 1) % len
            } else {
                (*cursor + len - 1) % len
            };
        }
    }

    /// Confirm the algorithm under the chooser cursor.
    pub fn chooser_confirm(&mut self) {
        if let Mode::ChooseAlgorithm(cursor) = self.mode {
            self.select_algorithm(cursor as i64 + 1);
        }
    }

    /// Select an algorithm by 1-based choice; unknown choices mean ant colony.
    pub fn select_algorithm(&mut self, choice: i64) {
        self.transcript.input(&choice.to_string());
        let algorithm = Algorithm::from_choice(choice);
        self.session.selected_algorithm = algorithm;
        self.mode = Mode::Menu;
        self.succeed(&format!("Selected: {}", algorithm.name()));
    }

    fn colony_config(&self) -> ColonyConfig {
        ColonyConfig {
            seed: self.config.seed.or(self.config.colony.seed),
            ..self.config.colony.clone()
        }
    }

    /// Start the selected solver on a worker thread.
    pub fn start_solve(&mut self) {
        if self.session.points.is_empty() {
            self.fail("No points loaded. Load or generate data first.");
            return;
        }
        if self.job.is_some() {
            self.status = "Solver already running".to_string();
            return;
        }

        let algorithm = self.session.selected_algorithm;
        self.transcript.header(&format!("Running {}", algorithm.name()));

        let cities = cities_from_points(&self.session.points);
        let (sender, events) = mpsc::channel();
        let control = SolveControl::with_progress(sender.clone());
        let worker_control = control.clone();
        let mut solver = create_solver(algorithm, &self.colony_config());

        let spawned = thread::Builder::new()
            .name("solver".to_string())
            .spawn(move || {
                let result = solver.solve(&cities, &worker_control);
                let _ = sender.send(SolveEvent::Finished(result));
            });

        match spawned {
            Ok(_) => {
                self.job = Some(SolveJob {
                    algorithm,
                    progress: None,
                    control,
                    events,
                });
                self.mode = Mode::Solving;
                self.status = format!("Solving with {}... (Esc to stop)", algorithm.name());
                tracing::info!("Started {} on {} points", algorithm.name(), self.session.points.len());
            },
            Err(e) => self.fail(&format!("Action failed: {}", e)),
        }
    }

    /// Ask the running solver to stop early.
    pub fn cancel_solve(&mut self) {
        if let Some(job) = &self.job {
            job.control.cancel();
            self.status = "Stopping solver...".to_string();
        }
    }

    /// Drain solver events. Returns true when a solve finished.
    pub fn poll_solver(&mut self) -> bool {
        let Some(job) = &mut self.job else {
            return false;
        };

        let mut finished = None;
        loop {
            match job.events.try_recv() {
                Ok(SolveEvent::Progress {
                    iteration,
                    max_iterations,
                    best_length,
                }) => {
                    job.progress = Some(SolveProgress {
                        iteration,
                        max_iterations,
                        best_length,
                    });
                },
                Ok(SolveEvent::Finished(result)) => {
                    finished = Some(result);
                    break;
                },
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    finished = Some(Err(SalesmanError::Cancelled));
                    tracing::error!("Solver thread ended without a result");
                    break;
                },
            }
        }

        match finished {
            Some(result) => {
                self.job = None;
                self.mode = Mode::Menu;
                self.finish_solve(result);
                true
            },
            None => false,
        }
    }

    fn finish_solve(&mut self, result: Result<SolveReport>) {
        match result {
            Ok(report) => {
                self.transcript.header("Result");
                self.transcript.println(report.tour.to_string());
                self.transcript
                    .println(format!("Time: {:.3} s", report.elapsed.as_secs_f64()));
                self.status = format!(
                    "{}: {:.2} after {} iteration(s), {}",
                    report.algorithm.name(),
                    report.tour.total_distance(),
                    report.iterations,
                    report.stop_reason.describe()
                );
                self.session.last_report = Some(report);
                self.session.is_result_saved = false;
            },
            Err(e) => self.fail(&format!("Action failed: {}", e)),
        }
    }

    /// Archive the last result with the transcript and chart.
    pub fn save_outputs(&mut self) {
        let Some(report) = &self.session.last_report else {
            self.fail("No solution to save. Run solver first.");
            return;
        };
        if self.session.is_result_saved {
            self.fail("Already saved.");
            return;
        }

        let saved = self
            .archiver
            .archive(report.algorithm.name(), &report.tour, &self.transcript.to_text());
        match saved {
            Ok(dir) => {
                self.session.is_result_saved = true;
                let shown = std::fs::canonicalize(&dir).unwrap_or(dir);
                self.succeed(&format!("Saved to: {}", shown.display()));
            },
            Err(e) => {
                tracing::error!("Archiving failed: {}", e);
                self.fail(&format!("Failed to save: {}", e));
            },
        }
    }

    /// Copy the last tour to the clipboard.
    pub fn copy_tour(&mut self) {
        let Some(report) = &self.session.last_report else {
            self.status = "No tour to copy".to_string();
            return;
        };
        match clipboard::copy_tour(report) {
            Ok(()) => self.status = "Tour copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Replace the working points and forget the previous result.
    fn update_points(&mut self, points: Vec<Point>) {
        let preview = preview_lines(&points, self.layout.preview_limit);
        self.session.points = points;
        self.session.last_report = None;
        self.session.is_result_saved = false;
        self.transcript.points_preview(&preview);
    }
}

/// Up to `limit` points as `(x, y)`, followed by a "... N more" line.
pub fn preview_lines(points: &[Point], limit: usize) -> Vec<String> {
    let mut lines: Vec<String> = points
        .iter()
        .take(limit)
        .map(|p| format!("({}, {})", p.x, p.y))
        .collect();
    if points.len() > limit {
        lines.push(format!("... {} more", points.len() - limit));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::write_points;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};
    use tempfile::{tempdir, TempDir};

    fn app_in(dir: &TempDir) -> App {
        App::new(AppConfig {
            data_file: dir.path().join("data.txt"),
            outputs_dir: dir.path().join("outputs"),
            seed: Some(42),
            ..AppConfig::default()
        })
    }

    fn wait_for_solver(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(120);
        while !app.poll_solver() {
            assert!(Instant::now() < deadline, "solver did not finish");
            thread::sleep(Duration::from_millis(5));
        }
    }

    fn transcript(app: &App) -> String {
        app.transcript.to_text()
    }

    #[test]
    fn starts_with_defaults() {
        let dir = tempdir().unwrap();
        let app = app_in(&dir);
        assert!(app.session.points.is_empty());
        assert_eq!(app.session.selected_algorithm, Algorithm::AntColony);
        assert!(!app.should_exit());
        assert!(transcript(&app).starts_with("=== TSP Solver Application ==="));
    }

    #[test]
    fn loads_points_from_file() {
        let dir = tempdir().unwrap();
        let points: Vec<_> = (0..12).map(|i| Point::new(i, 2 * i)).collect();
        write_points(&dir.path().join("data.txt"), &points).unwrap();
        let mut app = app_in(&dir);

        app.choose(1);

        assert_eq!(app.session.points, points);
        let text = transcript(&app);
        assert!(text.contains("[USER INPUT]: 1"));
        assert!(text.contains("Points Preview:\n(0, 0)\n(1, 2)"));
        assert!(text.contains("... 2 more"));
        assert!(text.contains("[SUCCESS]: Loaded 12 points."));
    }

    #[test]
    fn empty_file_is_reported() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("data.txt"), "0\n").unwrap();
        let mut app = app_in(&dir);

        app.load_data();

        assert!(app.session.points.is_empty());
        assert!(transcript(&app).contains("[ERROR]: File is empty."));
    }

    #[test]
    fn missing_file_fails_load() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);

        app.load_data();

        assert!(transcript(&app).contains("[ERROR]: Load failed: File not found"));
    }

    #[test]
    fn generate_prompt_creates_points() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);

        app.choose(2);
        assert!(matches!(app.mode, Mode::Prompt(_)));
        app.prompt_input('1');
        app.prompt_input('5');
        app.submit_prompt();

        assert!(matches!(app.mode, Mode::Menu));
        assert_eq!(app.session.points.len(), 15);
        assert!(transcript(&app).contains("[SUCCESS]: Generated 15 cities."));
        assert!(!dir.path().join("data.txt").exists());
    }

    #[test]
    fn non_positive_count_means_random_size() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);

        app.generate_data(0);
        let n = app.session.points.len();
        assert!((1..=50).contains(&n));

        app.generate_data(-4);
        assert!((1..=50).contains(&app.session.points.len()));
    }

    #[test]
    fn prompt_rejects_garbage_and_stays_open() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);

        app.choose(2);
        app.prompt_input('x');
        app.prompt_input('-');
        app.submit_prompt();

        match &app.mode {
            Mode::Prompt(prompt) => assert!(prompt.error.is_some()),
            other => panic!("prompt closed: {:?}", other),
        }
        app.cancel_dialog();
        assert!(matches!(app.mode, Mode::Menu));
    }

    #[test]
    fn generate_and_save_writes_data_file() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);

        app.generate_and_save(8);

        let saved = crate::storage::read_points(&dir.path().join("data.txt")).unwrap();
        assert_eq!(saved, app.session.points);
        assert!(transcript(&app).contains("[SUCCESS]: Generated and saved 8 cities."));
    }

    #[test]
    fn save_failure_keeps_old_points() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let mut app = App::new(AppConfig {
            data_file: blocker.join("data.txt"),
            seed: Some(1),
            ..AppConfig::default()
        });

        app.generate_and_save(5);

        assert!(app.session.points.is_empty());
        assert!(transcript(&app).contains("[ERROR]: Save failed:"));
    }

    #[test]
    fn chooses_algorithm() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);

        app.choose(4);
        assert!(matches!(app.mode, Mode::ChooseAlgorithm(1)));
        app.chooser_move(true);
        app.chooser_confirm();

        assert_eq!(app.session.selected_algorithm, Algorithm::Greedy);
        let text = transcript(&app);
        assert!(text.contains("--- Choose Algorithm ---"));
        assert!(text.contains("  1. Greedy Algorithm"));
        assert!(text.contains("[SUCCESS]: Selected: Greedy Algorithm"));

        app.select_algorithm(7);
        assert_eq!(app.session.selected_algorithm, Algorithm::AntColony);
    }

    #[test]
    fn solve_requires_points() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);

        app.choose(5);

        assert!(app.job.is_none());
        assert!(transcript(&app)
            .contains("[ERROR]: No points loaded. Load or generate data first."));
    }

    #[test]
    fn solves_and_archives_once() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        app.generate_data(12);
        app.select_algorithm(1);

        app.start_solve();
        assert!(matches!(app.mode, Mode::Solving));
        wait_for_solver(&mut app);

        let report = app.session.last_report.as_ref().unwrap();
        assert_eq!(report.algorithm, Algorithm::Greedy);
        assert_eq!(report.tour.len(), 12);
        let text = transcript(&app);
        assert!(text.contains("--- Running Greedy Algorithm ---"));
        assert!(text.contains("--- Result ---"));
        assert!(text.contains("Time: "));

        app.save_outputs();
        assert!(app.session.is_result_saved);
        let runs: Vec<PathBuf> = std::fs::read_dir(dir.path().join("outputs"))
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(runs.len(), 1);
        let logs = std::fs::read_to_string(runs[0].join("logs.txt")).unwrap();
        assert!(logs.contains("--- Result ---"));
        assert!(runs[0].join("chart.svg").is_file());

        app.save_outputs();
        assert!(transcript(&app).ends_with("[ERROR]: Already saved.\n"));
    }

    #[test]
    fn new_points_clear_previous_result() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        app.generate_data(5);
        app.select_algorithm(1);
        app.start_solve();
        wait_for_solver(&mut app);
        assert!(app.session.last_report.is_some());

        app.generate_data(6);

        assert!(app.session.last_report.is_none());
        app.save_outputs();
        assert!(transcript(&app).contains("[ERROR]: No solution to save. Run solver first."));
    }

    #[test]
    fn ant_colony_runs_in_background_with_progress() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        app.generate_data(10);

        app.start_solve();
        wait_for_solver(&mut app);

        let report = app.session.last_report.as_ref().unwrap();
        assert_eq!(report.algorithm, Algorithm::AntColony);
        assert!(report.iterations >= 1);
        assert!(app.job.is_none());
    }

    #[test]
    fn cancelled_solve_keeps_best_so_far() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        app.config.colony.stagnation_limit = usize::MAX;
        app.generate_data(40);

        app.start_solve();
        let deadline = Instant::now() + Duration::from_secs(60);
        while app.job.as_ref().is_some_and(|job| job.progress.is_none()) {
            assert!(!app.poll_solver(), "solver finished before reporting progress");
            assert!(Instant::now() < deadline, "no progress reported");
            thread::sleep(Duration::from_millis(1));
        }
        app.cancel_solve();
        wait_for_solver(&mut app);

        let report = app.session.last_report.as_ref().unwrap();
        assert_eq!(report.stop_reason, crate::solver::StopReason::Cancelled);
        assert!(report.iterations >= 1);
        assert_eq!(report.tour.len(), 40);
        assert!(transcript(&app).contains("--- Result ---"));
        assert!(matches!(app.mode, Mode::Menu));
    }

    #[test]
    fn invalid_menu_choice_is_reported() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);

        app.choose(9);

        assert!(transcript(&app).contains("[ERROR]: Action failed: Invalid choice: 9"));
    }

    #[test]
    fn exit_sets_flag() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        app.choose(7);
        assert!(app.should_exit());
    }

    #[test]
    fn preview_truncates_long_lists() {
        let points: Vec<_> = (0..3).map(|i| Point::new(i, i)).collect();
        assert_eq!(preview_lines(&points, 10), ["(0, 0)", "(1, 1)", "(2, 2)"]);
        assert_eq!(preview_lines(&points, 2), ["(0, 0)", "(1, 1)", "... 1 more"]);
    }

    #[test]
    fn solve_progress_ratio_is_clamped() {
        let progress = SolveProgress {
            iteration: 30,
            max_iterations: 20,
            best_length: 1.0,
        };
        assert_eq!(progress.ratio(), 1.0);
    }
}
