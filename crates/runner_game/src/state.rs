//! Run state and scoring

/// Whether the current run is still going
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Obstacles move and the score counts up
    #[default]
    Playing,
    /// The player was hit; frames are ignored until a restart
    GameOver,
}

/// Score and state of one play session
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    score: u64,
    best_score: u64,
    points_per_group: u64,
    runs: u32,
}

impl Session {
    /// Start a session in the playing state
    pub fn new(points_per_group: u64) -> Self {
        Self {
            state: GameState::Playing,
            score: 0,
            best_score: 0,
            points_per_group,
            runs: 1,
        }
    }

    /// Feed one frame's outcome into the state machine
    ///
    /// While playing, a hit ends the run; otherwise every group the player
    /// got past adds to the score. Game-over frames change nothing.
    pub fn frame(&mut self, hit: bool, passed: u32) -> GameState {
        if self.state == GameState::GameOver {
            return self.state;
        }

        if hit {
            self.state = GameState::GameOver;
            self.best_score = self.best_score.max(self.score);
            log::info!("Game over after run {} with score {}", self.runs, self.score);
        } else {
            self.score += u64::from(passed) * self.points_per_group;
        }
        self.state
    }

    /// Begin a new run with the score reset
    pub fn restart(&mut self) {
        self.best_score = self.best_score.max(self.score);
        self.state = GameState::Playing;
        self.score = 0;
        self.runs += 1;
        log::info!("Starting run {}", self.runs);
    }

    /// Current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Score of the current run
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Best score over every run so far
    pub fn best_score(&self) -> u64 {
        self.best_score.max(self.score)
    }

    /// Number of runs started
    pub fn runs(&self) -> u32 {
        self.runs
    }
}
