use anyhow::Result;
use rand::Rng;

use crate::experience::Experience;
use crate::memory::sampling::distinct_random_indices;
use crate::prelude::ReplayError;

/// Memory of the most recent `capacity` experiences.
///
/// Implemented as a ring buffer: the slots are allocated once, and when the memory is full a new
/// experience overwrites the oldest one in place. Sampling is uniform and without replacement.
pub struct ReplayMemory<S, A> {
    capacity: usize,
    slots: Vec<Experience<S, A>>,
    /// slot to be written next; once the memory is full this is also the oldest slot
    next_slot: usize,
}

impl<S, A> ReplayMemory<S, A> {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ReplayError::ZeroCapacity.into());
        }
        Ok(Self {
            capacity,
            slots: Vec::with_capacity(capacity),
            next_slot: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Appends `experience`, evicting the oldest one when the memory is full.
    pub fn store(&mut self, experience: Experience<S, A>) {
        if self.slots.len() < self.capacity {
            self.slots.push(experience);
        } else {
            self.slots[self.next_slot] = experience;
        }
        self.next_slot = (self.next_slot + 1) % self.capacity;
    }

    /// Stored experiences, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Experience<S, A>> {
        let (newer, older) = self.slots.split_at(self.oldest_slot());
        older.iter().chain(newer.iter())
    }

    fn oldest_slot(&self) -> usize {
        if self.slots.len() < self.capacity {
            0
        } else {
            self.next_slot
        }
    }
}

impl<S: Clone, A: Clone> ReplayMemory<S, A> {
    /// Samples `min(count, len)` experiences uniformly at random, without replacement.
    ///
    /// Returns owned copies; the order of the result carries no meaning.
    pub fn sample(&self, count: usize) -> Vec<Experience<S, A>> {
        self.sample_with_rng(&mut rand::thread_rng(), count)
    }

    pub fn sample_with_rng<R: Rng>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Vec<Experience<S, A>> {
        distinct_random_indices(rng, self.slots.len(), count)
            .into_iter()
            .map(|i| self.slots[i].clone())
            .collect()
    }
}
