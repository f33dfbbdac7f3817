pub mod env;
pub mod experience;
pub mod log;
pub mod memory;
pub mod play;
pub mod prelude;
pub mod util;
