//! # folio-cli: Portfolio Command-Line Interface
//!
//! Drives the same controllers a front end would, against the backend named
//! by `--api-url` or `FOLIO_API_URL`.
//!
//! ## Subcommands
//!
//! - `projects`: load the catalog, apply `--status` / `--search`, print
//!   the resulting view
//! - `contact`: fill the contact draft, submit it, print the banner
//!
//! ## Crate Policy
//!
//! - Argument parsing lives beside each handler; `main.rs` only dispatches.
//! - Handlers are generic over `PortfolioApi` and write to any
//!   `io::Write`, so they run in tests without a terminal.

pub mod contact;
pub mod projects;
