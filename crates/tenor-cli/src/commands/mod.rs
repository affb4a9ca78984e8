//! Command implementations.

pub mod classify;
pub mod config;
pub mod lexicon;
pub mod tag;
pub mod watch;

pub use self::classify::execute_classify;
pub use self::config::execute_config;
pub use self::lexicon::execute_lexicon;
pub use self::tag::execute_tag;
pub use self::watch::execute_watch;
