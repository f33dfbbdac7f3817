use std::sync::{Arc, RwLock};

use anyhow::Result;

use crate::experience::Experience;
use crate::memory::replay_memory::ReplayMemory;
use crate::prelude::ReplayError;

/// Cloneable handle to one [ReplayMemory] shared between threads.
///
/// `store` holds the write lock, so eviction and append happen as one unit.
/// Any number of `sample` calls may run in parallel under the read lock.
pub struct SharedReplayMemory<S, A> {
    memory: Arc<RwLock<ReplayMemory<S, A>>>,
}

impl<S, A> Clone for SharedReplayMemory<S, A> {
    fn clone(&self) -> Self {
        Self {
            memory: Arc::clone(&self.memory),
        }
    }
}

impl<S, A> SharedReplayMemory<S, A> {
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::from(ReplayMemory::new(capacity)?))
    }

    pub fn store(&self, experience: Experience<S, A>) -> Result<()> {
        let mut memory = self.memory.write().map_err(|_| poisoned())?;
        memory.store(experience);
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.memory.read().map_err(|_| poisoned())?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl<S: Clone, A: Clone> SharedReplayMemory<S, A> {
    pub fn sample(&self, count: usize) -> Result<Vec<Experience<S, A>>> {
        Ok(self.memory.read().map_err(|_| poisoned())?.sample(count))
    }
}

impl<S, A> From<ReplayMemory<S, A>> for SharedReplayMemory<S, A> {
    fn from(memory: ReplayMemory<S, A>) -> Self {
        Self {
            memory: Arc::new(RwLock::new(memory)),
        }
    }
}

fn poisoned() -> anyhow::Error {
    ReplayError::LockPoisoned.into()
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_concurrent_writers_keep_capacity() -> Result<()> {
        let shared = SharedReplayMemory::<u32, u8>::new(64)?;

        let handles: Vec<_> = (0..4_u32)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || -> Result<()> {
                    for i in 0..1_000_u32 {
                        shared.store(Experience::new(t * 10_000 + i, 0, 0, 0.0))?;
                        assert!(shared.len()? <= 64);
                    }
                    Ok(())
                })
            })
            .collect();

        for h in handles {
            h.join().expect("writer thread panicked")?;
        }

        assert_eq!(shared.len()?, 64);
        let sample = shared.sample(100)?;
        assert_eq!(sample.len(), 64);
        Ok(())
    }

    #[test]
    fn test_clones_share_the_same_memory() -> Result<()> {
        let a = SharedReplayMemory::<u32, u8>::new(2)?;
        let b = a.clone();
        assert!(b.is_empty()?);
        a.store(Experience::new(1, 0, 2, 1.0))?;
        assert_eq!(b.len()?, 1);
        assert_eq!(b.sample(1)?[0].state, 1);
        Ok(())
    }
}
