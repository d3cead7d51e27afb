//! Command handler modules for the RatonGato CLI.
//!
//! Each subcommand lives in its own file with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) and, for `play`, the input stream passed in
//! - Errors propagated via `CliError`; engine rejections are shown, not raised

mod board;
mod cfg;
mod play;
mod replay;
mod verify;

pub use board::handle_board_command;
pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use replay::handle_replay_command;
pub use verify::handle_verify_command;
