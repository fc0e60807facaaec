// Module exports for CLI subcommands
//
// Each module handles a group of related subcommands. main.rs parses the
// arguments, loads the street graph and dispatches to these handlers.

pub mod export;
pub mod inventory;
pub mod route;
