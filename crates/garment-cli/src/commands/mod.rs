//! Command implementations.

pub mod compare;
pub mod config;
pub mod divide;
pub mod game;

pub use self::compare::execute_compare;
pub use self::config::execute_config;
pub use self::divide::execute_divide;
pub use self::game::execute_game;
