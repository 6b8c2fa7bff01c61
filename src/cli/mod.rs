//! # CLI Module
//!
//! Command-line interface of the `tagwrangler-gen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Parse the tagged structs of one or more directories and write bindings:
//!
//! ```bash
//! tagwrangler-gen generate src/models
//! ```
//!
//! Options:
//! - `--strategy <same|per|single>` - Output grouping (default: same)
//! - `--target-pkg <NAME>` - Module name for the single strategy
//! - `--target-dir <DIR>` - Output directory for the per and single strategies
//! - `--target-pkgs <"A B">` - Module names for the per strategy, one per input directory
//! - `--dry-run` - Report output paths without writing
//!
//! ### `inspect`
//!
//! Print the descriptors found in one or more directories:
//!
//! ```bash
//! tagwrangler-gen inspect --json src/models
//! ```
//!
//! ## Examples
//!
//! ```bash
//! # Bindings next to the sources: src/models/models_bindings.rs
//! tagwrangler-gen generate src/models
//!
//! # One module per directory: src/bindings/users.rs, src/bindings/orders.rs
//! tagwrangler-gen generate --strategy per --target-dir src/bindings \
//!     --target-pkgs "users orders" src/users src/orders
//!
//! # Everything in one module: src/bindings/api.rs
//! tagwrangler-gen generate --strategy single --target-dir src/bindings \
//!     --target-pkg api src/users src/orders
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{build_plan, run, run_cli, Cli, Commands, Strategy};
