pub mod commands;
pub mod display;
pub mod logging;
pub mod session;

pub use commands::{Cli, execute, run};
pub use display::Palette;
pub use logging::init_logging;
pub use session::Session;
