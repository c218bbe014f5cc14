pub mod renderer;

use std::{
    io::{Stdout, Write},
    time::Duration,
};

use crossterm::{
    QueueableCommand, cursor,
    event::{self, KeyCode},
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::{
    maze::{Coord, Maze},
    presets::{self, Preset},
    solvers::{SearchResult, Solver, solve_maze},
};

/// Entries of the algorithm menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Single(Solver),
    CompareAll,
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::Single(solver) => write!(f, "{}", solver),
            Choice::CompareAll => write!(f, "Compare all"),
        }
    }
}

/// What the user asked for after a result was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextStep {
    Again,
    Exit,
}

pub struct App {
    /// Mazes offered in the first menu
    presets: Vec<Preset>,
    /// How often to check for a key press while waiting
    input_poll_timeout: Duration,
    /// Route line width used when the terminal size cannot be read
    fallback_route_width: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            presets: presets::catalog(),
            input_poll_timeout: Duration::from_millis(100),
            fallback_route_width: 80,
        }
    }
}

impl App {
    /// Algorithm menu, in display order
    const CHOICES: [Choice; 4] = [
        Choice::Single(Solver::Bfs),
        Choice::Single(Solver::Dfs),
        Choice::Single(Solver::AStar),
        Choice::CompareAll,
    ];

    pub fn with_presets(presets: Vec<Preset>) -> Self {
        Self {
            presets,
            ..Self::default()
        }
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Main application loop
    pub fn run(&self, stdout: &mut Stdout) -> std::io::Result<()> {
        tracing::info!("[app] Started main app loop");
        loop {
            App::clear(stdout)?;
            stdout.queue(style::PrintStyledContent(
                "Maze Pathfinding: compare BFS, DFS and A*\r\n\r\n"
                    .with(Color::Cyan)
                    .attribute(Attribute::Bold),
            ))?;

            let Some(preset) = App::select_from_menu(
                stdout,
                "Choose a maze (use arrow keys and Enter, or Esc to exit):",
                &self.presets,
            )?
            else {
                break;
            };
            let maze = preset.maze().map_err(std::io::Error::other)?;
            tracing::info!("[app] Selected preset {:?}", preset.name);

            App::clear(stdout)?;
            App::show_layout(stdout, &preset, &maze)?;

            let Some(choice) = App::select_from_menu(
                stdout,
                "Choose an algorithm (use arrow keys and Enter, or Esc to go back):",
                &App::CHOICES,
            )?
            else {
                continue;
            };

            App::clear(stdout)?;
            match choice {
                Choice::Single(solver) => self.run_single(stdout, &preset, &maze, solver)?,
                Choice::CompareAll => self.run_comparison(stdout, &preset, &maze)?,
            }

            stdout.queue(style::PrintStyledContent(
                "\r\nPress Enter to choose another maze, or Esc to exit...\r\n"
                    .with(Color::Blue)
                    .attribute(Attribute::Bold),
            ))?;
            stdout.flush()?;
            if self.wait_for_next_step()? == NextStep::Exit {
                break;
            }
        }
        tracing::info!("[app] Exiting main app loop");
        Ok(())
    }

    fn clear(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    /// Print the preset details and draw the unsolved maze
    fn show_layout(stdout: &mut Stdout, preset: &Preset, maze: &Maze) -> std::io::Result<()> {
        stdout.queue(style::PrintStyledContent(
            format!("{}\r\n", preset.name)
                .with(Color::Cyan)
                .attribute(Attribute::Bold),
        ))?;
        stdout.queue(style::Print(format!(
            "Start: {:?}  Goal: {:?}  Size: {}x{}\r\n\r\n",
            preset.start,
            preset.goal,
            maze.rows(),
            maze.cols()
        )))?;
        App::draw_if_fits(stdout, maze, preset.start, preset.goal, &[])?;
        stdout.queue(style::PrintStyledContent(
            "🟩 start  🟥 goal  🟦 wall  ⬜ free  🟨 path\r\n\r\n".with(Color::DarkGrey),
        ))?;
        Ok(())
    }

    fn draw_if_fits(
        stdout: &mut Stdout,
        maze: &Maze,
        start: Coord,
        goal: Coord,
        path: &[Coord],
    ) -> std::io::Result<()> {
        let (term_width, term_height) = terminal::size()?;
        if renderer::fits_terminal(maze, term_width, term_height) {
            renderer::draw_maze(stdout, maze, start, goal, path)
        } else {
            tracing::warn!(
                "[app] Terminal {}x{} too small for a {}x{} maze",
                term_width,
                term_height,
                maze.rows(),
                maze.cols()
            );
            stdout.queue(style::PrintStyledContent(
                "Terminal is too small to draw this maze. Please resize the terminal.\r\n"
                    .with(Color::Yellow)
                    .attribute(Attribute::Bold),
            ))?;
            Ok(())
        }
    }

    fn run_single(
        &self,
        stdout: &mut Stdout,
        preset: &Preset,
        maze: &Maze,
        solver: Solver,
    ) -> std::io::Result<()> {
        let result = solve_maze(maze, solver, preset.start, preset.goal);
        tracing::debug!(
            "[app] {} on {}:\n{}",
            solver.short_name(),
            preset.name,
            renderer::render_plain(maze, preset.start, preset.goal, &result.path)
        );

        let message = banner(solver, &result);
        let color = if result.success {
            Color::Green
        } else {
            Color::Red
        };
        stdout.queue(style::PrintStyledContent(
            format!("{}\r\n\r\n", message)
                .with(color)
                .attribute(Attribute::Bold),
        ))?;

        if result.success {
            App::draw_if_fits(stdout, maze, preset.start, preset.goal, &result.path)?;
            stdout.queue(style::Print("\r\n"))?;
        }
        for line in metric_lines(&result) {
            stdout.queue(style::Print(format!("{}\r\n", line)))?;
        }
        if result.success {
            let width = terminal::size()
                .map(|(w, _)| w as usize)
                .unwrap_or(self.fallback_route_width);
            let route = renderer::format_route(&result.path);
            stdout.queue(style::Print(format!(
                "Route: {}\r\n",
                renderer::truncate_to_width(&route, width.saturating_sub("Route: ".len()))
            )))?;
        }
        stdout.flush()
    }

    fn run_comparison(
        &self,
        stdout: &mut Stdout,
        preset: &Preset,
        maze: &Maze,
    ) -> std::io::Result<()> {
        let results = Solver::ALL
            .iter()
            .map(|&solver| (solver, solve_maze(maze, solver, preset.start, preset.goal)))
            .collect::<Vec<_>>();

        stdout.queue(style::PrintStyledContent(
            format!("Comparison on {}\r\n\r\n", preset.name)
                .with(Color::Cyan)
                .attribute(Attribute::Bold),
        ))?;
        // Overlay the A* route, which is always among the shortest
        if let Some((_, best)) = results
            .iter()
            .find(|(solver, result)| *solver == Solver::AStar && result.success)
        {
            App::draw_if_fits(stdout, maze, preset.start, preset.goal, &best.path)?;
            stdout.queue(style::Print("\r\n"))?;
        }
        stdout.queue(style::PrintStyledContent(
            format!("{}\r\n", comparison_header()).attribute(Attribute::Bold),
        ))?;
        for (solver, result) in &results {
            stdout.queue(style::Print(format!(
                "{}\r\n",
                comparison_row(*solver, result)
            )))?;
        }
        stdout.flush()
    }

    /// Block until Enter or Esc is pressed
    fn wait_for_next_step(&self) -> std::io::Result<NextStep> {
        loop {
            if !event::poll(self.input_poll_timeout)? {
                continue;
            }
            if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
                if kind != event::KeyEventKind::Press {
                    continue;
                }
                match code {
                    KeyCode::Enter => return Ok(NextStep::Again),
                    KeyCode::Esc => {
                        tracing::debug!("[input loop] Esc key pressed, exiting");
                        return Ok(NextStep::Exit);
                    }
                    _ => {}
                }
            }
        }
    }

    /// Show a menu of options and let the user select one using arrow keys and Enter
    /// Returns None if user cancels selection with Esc
    fn select_from_menu<T: std::fmt::Display + Copy>(
        stdout: &mut Stdout,
        prompt: &str,
        options: &[T],
    ) -> std::io::Result<Option<T>> {
        if options.is_empty() {
            return Ok(None);
        }

        // Save cursor position so we can restore / redraw
        queue!(stdout, cursor::Hide, cursor::SavePosition)?;

        let mut selected = 0;

        let selected_option = loop {
            // Re-render prompt line
            queue!(
                stdout,
                cursor::RestorePosition,
                terminal::Clear(ClearType::FromCursorDown)
            )?;

            stdout.queue(style::PrintStyledContent(prompt.with(Color::Yellow)))?;

            for (i, option) in options.iter().enumerate() {
                if i == selected {
                    stdout.queue(style::SetAttribute(Attribute::Reverse))?;
                }
                stdout.queue(style::Print(format!("\r\n{}", option)))?;
                if i == selected {
                    stdout.queue(style::SetAttribute(Attribute::NoReverse))?;
                }
            }
            stdout.queue(style::Print("\r\n"))?;

            stdout.flush()?;

            if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
                if kind != event::KeyEventKind::Press {
                    continue;
                }
                match code {
                    KeyCode::Up => {
                        selected = match selected {
                            0 => options.len() - 1,
                            _ => selected - 1,
                        };
                    }
                    KeyCode::Down => {
                        selected = (selected + 1) % options.len();
                    }
                    KeyCode::Enter => break Some(options[selected]),
                    KeyCode::Esc => break None,
                    _ => {}
                }
            }
        };
        // Cleanup
        queue!(
            stdout,
            cursor::RestorePosition,
            terminal::Clear(ClearType::FromCursorDown),
            cursor::Show
        )?;
        stdout.flush()?;

        Ok(selected_option)
    }
}

fn banner(solver: Solver, result: &SearchResult) -> String {
    if result.success {
        format!("Path found using {}!", solver.short_name())
    } else {
        format!("No path found using {}!", solver.short_name())
    }
}

/// Metrics shown under a single result. Steps are omitted when there is no path.
fn metric_lines(result: &SearchResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);
    if result.success {
        lines.push(format!("Steps: {}", result.steps));
    }
    lines.push(format!("Nodes Explored: {}", result.nodes_explored));
    lines.push(format!("Time (seconds): {:.4}", result.time_secs()));
    lines
}

fn comparison_header() -> String {
    format!(
        "{:<10}{:>8}{:>8}{:>16}{:>12}",
        "Algorithm", "Found", "Steps", "Nodes Explored", "Time (s)"
    )
}

fn comparison_row(solver: Solver, result: &SearchResult) -> String {
    format!(
        "{:<10}{:>8}{:>8}{:>16}{:>12.4}",
        solver.short_name(),
        if result.success { "yes" } else { "no" },
        result.steps,
        result.nodes_explored,
        result.time_secs()
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn result(success: bool) -> SearchResult {
        if success {
            SearchResult::found(vec![(0, 0), (0, 1), (1, 1)], 4, Duration::from_micros(1500))
        } else {
            SearchResult::failed(12, Duration::from_millis(2))
        }
    }

    #[test]
    fn test_metric_lines() {
        assert_eq!(
            metric_lines(&result(true)),
            vec!["Steps: 2", "Nodes Explored: 4", "Time (seconds): 0.0015"]
        );
        assert_eq!(
            metric_lines(&result(false)),
            vec!["Nodes Explored: 12", "Time (seconds): 0.0020"]
        );
    }

    #[test]
    fn test_banner() {
        assert_eq!(banner(Solver::AStar, &result(true)), "Path found using A*!");
        assert_eq!(banner(Solver::Dfs, &result(false)), "No path found using DFS!");
    }

    #[test]
    fn test_comparison_row_aligns_with_header() {
        let row = comparison_row(Solver::Bfs, &result(true));
        assert_eq!(row.len(), comparison_header().len());
        assert!(row.starts_with("BFS"));
        assert!(row.ends_with("0.0015"));
    }

    #[test]
    fn test_choice_display() {
        assert_eq!(Choice::CompareAll.to_string(), "Compare all");
        assert_eq!(
            Choice::Single(Solver::Dfs).to_string(),
            "Depth-First Search (DFS)"
        );
        assert_eq!(App::CHOICES.len(), Solver::ALL.len() + 1);
    }

    #[test]
    fn test_default_app_has_presets() {
        let app = App::default();
        assert_eq!(app.presets, presets::catalog());
        assert!(App::with_presets(Vec::new()).presets.is_empty());
    }
}
