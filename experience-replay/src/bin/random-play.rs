use std::time::Duration;

use anyhow::Result;

use experience_replay::env::catch_environment::CatchEnvironment;
use experience_replay::log::init_logging;
use experience_replay::memory::replay_memory::ReplayMemory;
use experience_replay::play::random_player::{Parameter, RandomPlayer};
use experience_replay::prelude::DebugVisualizer;

const NUM_EPISODES: usize = 25;
const REPLAY_MEMORY_CAPACITY: usize = 100;
const BATCH_SIZE: usize = 8;

/// Plays Catch with random actions, rendering the first episode, and fills a replay memory.
fn main() -> Result<()> {
    init_logging();

    let mut memory = ReplayMemory::new(REPLAY_MEMORY_CAPACITY)?;

    let mut param = Parameter::default();
    param.render = true;
    param.render_scale = 2;
    param.frame_delay = Duration::from_millis(150);
    let mut player = RandomPlayer::with_thread_rng(CatchEnvironment::new(), param)?;
    player.play_episode(Some(&mut memory))?;

    let mut player = RandomPlayer::with_thread_rng(CatchEnvironment::new(), Parameter::default())?;
    let reports = player.play_episodes(NUM_EPISODES, Some(&mut memory))?;
    let caught = reports.iter().filter(|r| r.total_reward > 0.0).count();
    log::info!("caught the ball in {} of {} random episodes", caught, reports.len());

    log::info!("replay memory holds {} of {} experiences", memory.len(), memory.capacity());
    for e in memory.sample(BATCH_SIZE) {
        log::info!(
            "{} --{}--> {} reward: {:.1}",
            e.state.one_line_info(),
            e.action,
            e.next_state.one_line_info(),
            e.reward
        );
    }
    Ok(())
}
