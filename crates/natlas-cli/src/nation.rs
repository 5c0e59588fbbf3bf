//! Single-nation subcommands: `show`, `metrics`, `neighbors`, `compare`.
//!
//! Each takes nation codes in any case. A malformed code exits with `2`; a
//! well-formed code that is not catalogued prints the not-found body and
//! exits with `1`.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use natlas_catalog::{calculate_distance, Catalog};
use natlas_core::{assert_nation_code, Nation, NationCode, Region};
use natlas_metrics::compute_nation_metrics;
use natlas_query::{ErrorResponse, NationDetailResponse};

use crate::config::AppContext;
use crate::{report_error, write_json, EXIT_OK};

#[derive(Args, Debug)]
pub struct CodeArgs {
    /// ISO 3166-1 alpha-3 code, any case (e.g. usa).
    pub code: String,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First nation; relation fields describe its view of the second.
    pub a: String,
    /// Second nation.
    pub b: String,
}

/// One entry of `natlas neighbors` output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborSummary<'a> {
    pub code: &'a NationCode,
    pub name: &'a str,
    pub region: Region,
    /// Capital-to-capital distance.
    pub distance_km: f64,
}

/// Resolve a code argument, or report why it could not be and return the
/// exit code.
fn resolve<'a>(catalog: &'a Catalog, raw: &str) -> Result<&'a Nation, u8> {
    let code = assert_nation_code(raw).map_err(|err| report_error(&ErrorResponse::from(&err)))?;
    catalog
        .get(code.as_str())
        .ok_or_else(|| report_error(&ErrorResponse::not_found(&code)))
}

pub fn run_show(args: &CodeArgs, ctx: &AppContext, out: &mut dyn Write) -> Result<u8> {
    let nation = match resolve(&ctx.catalog, &args.code) {
        Ok(nation) => nation,
        Err(code) => return Ok(code),
    };
    write_json(out, &NationDetailResponse::from(nation))?;
    Ok(EXIT_OK)
}

pub fn run_metrics(args: &CodeArgs, ctx: &AppContext, out: &mut dyn Write) -> Result<u8> {
    let nation = match resolve(&ctx.catalog, &args.code) {
        Ok(nation) => nation,
        Err(code) => return Ok(code),
    };
    write_json(out, &compute_nation_metrics(nation))?;
    Ok(EXIT_OK)
}

pub fn run_neighbors(args: &CodeArgs, ctx: &AppContext, out: &mut dyn Write) -> Result<u8> {
    let nation = match resolve(&ctx.catalog, &args.code) {
        Ok(nation) => nation,
        Err(code) => return Ok(code),
    };
    let neighbors: Vec<NeighborSummary<'_>> = ctx
        .catalog
        .neighbors(nation)
        .into_iter()
        .map(|n| NeighborSummary {
            code: &n.code,
            name: &n.name,
            region: n.geography.region,
            distance_km: calculate_distance(nation, n),
        })
        .collect();

    tracing::debug!(
        code = %nation.code,
        borders = nation.geography.land_borders.len(),
        resolved = neighbors.len(),
        "resolved neighbors"
    );
    write_json(out, &neighbors)?;
    Ok(EXIT_OK)
}

pub fn run_compare(args: &CompareArgs, ctx: &AppContext, out: &mut dyn Write) -> Result<u8> {
    let a = match resolve(&ctx.catalog, &args.a) {
        Ok(nation) => nation,
        Err(code) => return Ok(code),
    };
    let b = match resolve(&ctx.catalog, &args.b) {
        Ok(nation) => nation,
        Err(code) => return Ok(code),
    };
    let comparison = ctx
        .catalog
        .compare_nations(a.code.as_str(), b.code.as_str())
        .with_context(|| format!("comparing {} and {}", a.code, b.code))?;
    write_json(out, &comparison)?;
    Ok(EXIT_OK)
}
