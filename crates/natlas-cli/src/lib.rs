//! # natlas-cli: Command-Line Interface
//!
//! Provides the `natlas` binary over the query, catalog, metrics, and
//! validation crates.
//!
//! ## Subcommands
//!
//! - `natlas list`: filter, sort, and limit the catalog (JSON list envelope).
//! - `natlas show`: one nation (JSON detail envelope).
//! - `natlas compare`: two nations side by side.
//! - `natlas metrics`: derived per-capita figures and power indices.
//! - `natlas neighbors`: catalogued land-border neighbors with distances.
//! - `natlas validate`: integrity check of the catalog or a JSON file.
//!
//! ```bash
//! natlas list --region asia --sort population --order desc --limit 3
//! natlas show usa
//! natlas compare USA CHN
//! natlas validate data/nations.json
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: success.
//! - `1`: not found, invalid data, or any other failure.
//! - `2`: malformed input (a query parameter or nation code).

pub mod config;
pub mod list;
pub mod nation;
pub mod validate;

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use natlas_core::INVALID_QUERY_STATUS;
use natlas_query::ErrorResponse;

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Report an error body on stderr and return its exit code.
pub fn report_error(body: &ErrorResponse) -> u8 {
    match serde_json::to_string(body) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{}", body.error),
    }
    exit_code_for(body)
}

/// `2` for malformed input, `1` for everything else.
pub fn exit_code_for(body: &ErrorResponse) -> u8 {
    if body.status == INVALID_QUERY_STATUS {
        EXIT_USAGE
    } else {
        EXIT_FAILURE
    }
}
