//! CLI domain: parse, route, output, and presentation only.
//! No domain logic; the route hands a validated path and mode to the core.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{exit_code, map_error};
pub use parse::{Cli, OutputFormat};
pub use presentation::{format_outcome_json, format_outcome_text};
pub use route::RunContext;
