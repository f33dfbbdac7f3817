pub mod random_player;
pub mod render;
