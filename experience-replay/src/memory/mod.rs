pub mod replay_memory;
pub mod sampling;
pub mod shared;
