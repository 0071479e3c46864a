//! Messages exchanged with the game loop thread.

use apex_core::commands::PursuitCommand;

/// Commands sent from the console to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// A command to forward to the pursuit session.
    Pursuit(PursuitCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}
