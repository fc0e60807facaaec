//! cityroute CLI library.
//!
//! Output formatting and graph loading shared by the `cityroute-cli`
//! subcommands.

pub mod output;
pub mod source;
