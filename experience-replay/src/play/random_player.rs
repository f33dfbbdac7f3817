use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use itertools::Itertools;
use num_format::ToFormattedString;
use rand::prelude::ThreadRng;
use rand::Rng;
use rustc_hash::FxHashMap;

use crate::experience::Experience;
use crate::memory::replay_memory::ReplayMemory;
use crate::play::render::{render_scaled, screen_to_text};
use crate::prelude::{Action, DebugVisualizer, Environment, ReplayError};
use crate::util::format;

pub struct Parameter {
    /// An episode is truncated after that many steps
    pub max_steps_per_episode: usize,
    /// Draw every frame to stdout
    pub render: bool,
    /// Each console cell of a frame is drawn as a `render_scale` x `render_scale` block
    pub render_scale: u32,
    /// Pause after each rendered frame
    pub frame_delay: Duration,
}

impl Default for Parameter {
    fn default() -> Self {
        Self {
            max_steps_per_episode: 10_000,
            render: false,
            render_scale: 1,
            frame_delay: Duration::ZERO,
        }
    }
}

/// Outcome of one episode
#[derive(Debug, Clone)]
pub struct EpisodeReport<A: Action> {
    pub steps: usize,
    pub total_reward: f32,
    /// the environment reported the episode as done
    pub terminated: bool,
    /// the episode was stopped by `max_steps_per_episode`
    pub truncated: bool,
    pub action_counts: FxHashMap<A, usize>,
}

impl<A: Action> EpisodeReport<A> {
    fn new() -> Self {
        Self {
            steps: 0,
            total_reward: 0.0,
            terminated: false,
            truncated: false,
            action_counts: FxHashMap::default(),
        }
    }

    fn action_distribution_line(&self) -> String {
        self.action_counts
            .iter()
            .sorted_by_key(|(action, _)| action.numeric())
            .map(|(&action, &count)| {
                let ratio = 100.0 * count as f32 / self.steps as f32;
                format!("{} {:.1}%", action, ratio)
            })
            .join(", ")
    }
}

/// Plays episodes in an environment taking uniformly random actions.
///
/// Every transition may be recorded into a [ReplayMemory], so the memory can be filled
/// before any learning model exists.
pub struct RandomPlayer<E, R = ThreadRng>
where
    E: Environment,
    R: Rng,
{
    environment: E,
    param: Parameter,
    rng: R,
    /// rendered frames go here, stdout by default
    frame_sink: Box<dyn Write + Send>,
    step_count: usize,
    episode_count: usize,
}

impl<E: Environment> RandomPlayer<E> {
    pub fn with_thread_rng(
        environment: E,
        param: Parameter,
    ) -> Result<Self> {
        Self::new(environment, param, rand::thread_rng())
    }
}

impl<E, R> RandomPlayer<E, R>
where
    E: Environment,
    R: Rng,
{
    pub fn new(
        environment: E,
        param: Parameter,
        rng: R,
    ) -> Result<Self> {
        if param.render_scale == 0 {
            return Err(ReplayError::InvalidParameter("render_scale must be greater than zero").into());
        }
        if E::A::ACTION_SPACE == 0 {
            return Err(ReplayError::InvalidParameter("action space must not be empty").into());
        }
        Ok(Self {
            environment,
            param,
            rng,
            frame_sink: Box::new(std::io::stdout()),
            step_count: 0,
            episode_count: 0,
        })
    }

    pub fn with_frame_sink(
        mut self,
        frame_sink: impl Write + Send + 'static,
    ) -> Self {
        self.frame_sink = Box::new(frame_sink);
        self
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Total number of steps taken over all episodes, including aborted ones
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn episode_count(&self) -> usize {
        self.episode_count
    }

    /// Plays one episode from a fresh `reset` until the environment is done or the
    /// episode gets truncated.
    ///
    /// When rendering fails mid-episode the error is returned, but the steps taken so far
    /// (and stored into `memory`) still count.
    pub fn play_episode(
        &mut self,
        memory: Option<&mut ReplayMemory<E::S, E::A>>,
    ) -> Result<EpisodeReport<E::A>> {
        let mut report = EpisodeReport::new();
        let outcome = self.run_episode(memory, &mut report);

        self.step_count += report.steps;
        self.episode_count += 1;
        if let Err(e) = outcome {
            log::warn!("episode {} aborted after {} steps: {}", self.episode_count, report.steps, e);
            return Err(e);
        }
        report.truncated = !report.terminated;
        self.episode_log(&report);
        Ok(report)
    }

    fn run_episode(
        &mut self,
        mut memory: Option<&mut ReplayMemory<E::S, E::A>>,
        report: &mut EpisodeReport<E::A>,
    ) -> Result<()> {
        self.environment.reset();
        let mut state = self.environment.state().clone();
        log::trace!("started episode {}", self.episode_count);
        self.render(&state)?;

        while report.steps < self.param.max_steps_per_episode {
            let action: E::A = Action::try_from_numeric(self.rng.gen_range(0..E::A::ACTION_SPACE))?;

            log::trace!("{}", state.one_line_info());
            let (state_next, reward, done) = self.environment.step(action);
            let state_next = state_next.clone();
            log::trace!("step with action {} resulted in reward: {:.2}, done: {}", action, reward, done);

            report.steps += 1;
            report.total_reward += reward;
            *report.action_counts.entry(action).or_insert(0) += 1;

            if let Some(memory) = memory.as_deref_mut() {
                memory.store(Experience::new(state, action, state_next.clone(), reward));
            }
            state = state_next;
            self.render(&state)?;

            if done {
                report.terminated = true;
                break;
            }
        }
        Ok(())
    }

    pub fn play_episodes(
        &mut self,
        num_episodes: usize,
        mut memory: Option<&mut ReplayMemory<E::S, E::A>>,
    ) -> Result<Vec<EpisodeReport<E::A>>> {
        (0..num_episodes)
            .map(|_| self.play_episode(memory.as_deref_mut()))
            .collect()
    }

    fn render(
        &mut self,
        state: &E::S,
    ) -> Result<()> {
        if !self.param.render {
            return Ok(());
        }
        let screen = render_scaled(&state.render_to_console(), self.param.render_scale)?;
        let sink = &mut self.frame_sink;
        writeln!(sink, "{}", state.one_line_info())?;
        write!(sink, "{}", screen_to_text(&screen)?)?;
        writeln!(sink, "-----")?;
        sink.flush()?;

        if !self.param.frame_delay.is_zero() {
            thread::sleep(self.param.frame_delay);
        }
        Ok(())
    }

    fn episode_log(
        &self,
        report: &EpisodeReport<E::A>,
    ) {
        let number_format = format::number_format();
        log::info!(
            "episode: {}, steps: {} (total: {}), reward: {:.2}, {}, action_distribution: {}",
            self.episode_count.to_formatted_string(&number_format),
            report.steps.to_formatted_string(&number_format),
            self.step_count.to_formatted_string(&number_format),
            report.total_reward,
            if report.terminated { "terminated" } else { "truncated" },
            report.action_distribution_line()
        );
    }
}
