use std::fmt::{Display, Formatter};

use anyhow::Result;
use console_engine::pixel;
use console_engine::screen::Screen;
use rand::Rng;

use crate::prelude::{Action, DebugVisualizer, Environment, ModelActionType, ReplayError};

pub const CATCH_FIELD_WIDTH: usize = 5;
pub const CATCH_FIELD_HEIGHT: usize = 6;

/// A small arcade game in the spirit of the Atari classics.
///
/// 5x6 field (y=0 top / y=5 bottom)
/// - A ball starts at a random column on the top row and falls one row per step.
/// - A paddle on the bottom row, initially in the middle column, may be moved west or east
///   by one column per step (it stops at the walls).
/// - When the ball reaches the bottom row the game ends: reward `1.0` if the paddle is below
///   the ball, `-1.0` otherwise. All other steps yield `0.0`.
#[derive(Clone)]
pub struct CatchEnvironment {
    state: CatchState,
}

impl CatchEnvironment {
    pub fn new() -> Self {
        Self {
            state: CatchState::random_initial_state(),
        }
    }
}

impl Default for CatchEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CatchState> for CatchEnvironment {
    fn from(state: CatchState) -> Self {
        Self { state }
    }
}

impl Environment for CatchEnvironment {
    type S = CatchState;
    type A = CatchAction;

    fn reset(&mut self) {
        self.state = CatchState::random_initial_state()
    }

    fn state(&self) -> &Self::S {
        &self.state
    }

    fn step(
        &mut self,
        action: Self::A,
    ) -> (&Self::S, f32, bool) {
        if self.state.finished() {
            return (self.state(), 0.0, true);
        }
        self.state.do_move(action);
        match self.state.finished() {
            true if self.state.caught() => (self.state(), 1.0, true),
            true => (self.state(), -1.0, true),
            false => (self.state(), 0.0, false),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatchState {
    /// (x,y)
    pub ball_coord: (usize, usize),
    pub paddle_x: usize,
    pub steps: usize,
}

impl CatchState {
    /// # Panics
    /// if `ball_coord` lies outside the field or `paddle_x` is not a column of the field
    pub fn new(
        ball_coord: (usize, usize),
        paddle_x: usize,
    ) -> Self {
        assert!(ball_coord.0 < CATCH_FIELD_WIDTH && ball_coord.1 < CATCH_FIELD_HEIGHT);
        assert!(paddle_x < CATCH_FIELD_WIDTH);
        Self {
            ball_coord,
            paddle_x,
            steps: 0,
        }
    }

    fn random_initial_state() -> Self {
        let ball_x = rand::thread_rng().gen_range(0..CATCH_FIELD_WIDTH);
        Self::new((ball_x, 0), CATCH_FIELD_WIDTH / 2)
    }

    fn do_move(
        &mut self,
        action: CatchAction,
    ) {
        use CatchAction::*;
        self.paddle_x = match action {
            West if self.paddle_x > 0 => self.paddle_x - 1,
            East if self.paddle_x < CATCH_FIELD_WIDTH - 1 => self.paddle_x + 1,
            _ => self.paddle_x,
        };
        self.ball_coord.1 += 1;
        self.steps += 1;
    }

    pub fn finished(&self) -> bool {
        self.ball_coord.1 == CATCH_FIELD_HEIGHT - 1
    }

    fn caught(&self) -> bool {
        self.finished() && self.ball_coord.0 == self.paddle_x
    }
}

impl DebugVisualizer for CatchState {
    fn one_line_info(&self) -> String {
        format!(
            "Catch: step {}, ball at ({},{}), paddle at {}",
            self.steps, self.ball_coord.0, self.ball_coord.1, self.paddle_x
        )
    }

    fn render_to_console(&self) -> Screen {
        let mut screen = Screen::new_empty(CATCH_FIELD_WIDTH as u32, CATCH_FIELD_HEIGHT as u32);
        screen.clear();
        screen.set_pxl(self.paddle_x as i32, (CATCH_FIELD_HEIGHT - 1) as i32, pixel::pxl('▀'));
        screen.set_pxl(self.ball_coord.0 as i32, self.ball_coord.1 as i32, pixel::pxl('●'));
        screen
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CatchAction {
    Nothing,
    West,
    East,
}

impl Display for CatchAction {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Action for CatchAction {
    const ACTION_SPACE: ModelActionType = 3;

    fn numeric(&self) -> ModelActionType {
        use CatchAction::*;
        match self {
            Nothing => 0,
            West => 1,
            East => 2,
        }
    }

    fn try_from_numeric(value: ModelActionType) -> Result<Self> {
        use CatchAction::*;
        match value {
            0 => Ok(Nothing),
            1 => Ok(West),
            2 => Ok(East),
            _ => Err(ReplayError::ActionOutOfRange(value).into()),
        }
    }
}
