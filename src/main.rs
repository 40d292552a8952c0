//! Startup 2048 - terminal entry point
//!
//! Line-oriented shell: type a direction and press enter.

use std::io::{self, BufRead, Write};

use startup_2048::platform::{Command, parse_command};
use startup_2048::renderer::{TITLE, render_help, render_screen};
use startup_2048::{GameSession, HighScores, Settings, TurnOutcome};

struct Shell {
    settings: Settings,
    session: GameSession,
    high_scores: HighScores,
    /// Whether the current game has been entered on the leaderboard
    recorded: bool,
}

impl Shell {
    fn new(settings: Settings) -> Self {
        let session = GameSession::new(settings.next_seed());
        Self {
            settings,
            session,
            high_scores: HighScores::new(),
            recorded: false,
        }
    }

    fn record_once(&mut self) {
        if !self.recorded {
            self.high_scores.record(&self.session);
            self.recorded = true;
        }
    }

    /// Returns false when the shell should exit
    fn handle(&mut self, command: Command, out: &mut impl Write) -> io::Result<bool> {
        match command {
            Command::Move(direction) => match self.session.play(direction) {
                TurnOutcome::Ignored => {
                    writeln!(out, "The game is over. Press r to start a new one.")?;
                }
                TurnOutcome::Unchanged => {
                    writeln!(out, "Nothing moves {}.", direction.as_str())?;
                }
                TurnOutcome::Moved { status, .. } => {
                    if status.is_finished() {
                        self.record_once();
                    }
                    write!(out, "{}", render_screen(&self.session, &self.settings))?;
                }
            },
            Command::Reset => {
                if self.session.moves() > 0 {
                    self.record_once();
                }
                self.session.reset(self.settings.next_seed());
                self.recorded = false;
                write!(out, "{}", render_screen(&self.session, &self.settings))?;
            }
            Command::Help => writeln!(out, "{}", render_help())?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn farewell(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.session.moves() > 0 {
            self.record_once();
        }
        if let Some(top) = self.high_scores.top_score() {
            writeln!(out, "Best score this session: {top}")?;
        }
        Ok(())
    }
}

fn run() -> io::Result<()> {
    let settings = Settings::load();
    let mut shell = Shell::new(settings);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    write!(out, "{}", render_screen(&shell.session, &shell.settings))?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let keep_going = match parse_command(&line) {
            Some(command) => shell.handle(command, &mut out)?,
            None => {
                writeln!(out, "Unknown input {:?}. Type ? for help.", line.trim())?;
                true
            }
        };
        out.flush()?;
        if !keep_going {
            break;
        }
    }

    shell.farewell(&mut out)
}

fn main() {
    env_logger::init();
    log::info!("{} starting...", TITLE);

    if let Err(err) = run() {
        log::error!("Terminal I/O failed: {err}");
        std::process::exit(1);
    }
}
