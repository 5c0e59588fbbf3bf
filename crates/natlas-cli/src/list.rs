//! `natlas list`: run a nation list query and print the list envelope.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use natlas_query::{list_nations, parse_nation_list_query, ErrorResponse, NationListResponse};

use crate::config::{AppContext, CliConfig};
use crate::{report_error, write_json, EXIT_OK};

/// List subcommand arguments.
///
/// Values are passed through as raw strings so that they are validated by
/// the query parser, exactly like parameters from any other source.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive substring of name, official name, or code.
    #[arg(long)]
    pub search: Option<String>,

    /// Region wire value (e.g. europe, middle_east).
    #[arg(long)]
    pub region: Option<String>,

    /// Alliance name (e.g. NATO, BRICS).
    #[arg(long)]
    pub alliance: Option<String>,

    /// Sort field: name, population, gdp, area, stability, freedomIndex, softPower.
    #[arg(long)]
    pub sort: Option<String>,

    /// asc or desc.
    #[arg(long)]
    pub order: Option<String>,

    /// Maximum number of nations to return.
    #[arg(long)]
    pub limit: Option<String>,

    /// Extra key=value filter echoed in the response metadata. Repeatable.
    #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,
}

/// Parse a `KEY=VALUE` pair. The value may be empty; the key may not.
pub fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}

impl ListArgs {
    /// Flatten the flags into query parameters, filling `sort`, `order`, and
    /// `limit` from the config when they were not given.
    ///
    /// Flags come before `--filter` pairs, so a flag wins over a filter that
    /// names the same key.
    pub fn query_pairs(&self, config: &CliConfig) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                pairs.push((key.to_string(), value));
            }
        };

        push("search", self.search.clone());
        push("region", self.region.clone());
        push("alliance", self.alliance.clone());
        push("sort", self.sort.clone().or_else(|| config.default_sort.clone()));
        push("order", self.order.clone().or_else(|| config.default_order.clone()));
        push(
            "limit",
            self.limit
                .clone()
                .or_else(|| config.default_limit.map(|l| l.to_string())),
        );

        pairs.extend(self.filters.iter().cloned());
        pairs
    }
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs, ctx: &AppContext, out: &mut dyn Write) -> Result<u8> {
    let pairs = args.query_pairs(&ctx.config);
    let query = match parse_nation_list_query(pairs) {
        Ok(query) => query,
        Err(err) => {
            tracing::debug!(error = %err, "rejected list query");
            return Ok(report_error(&ErrorResponse::from(&err)));
        }
    };

    let result = list_nations(&query, &ctx.catalog);
    write_json(out, &NationListResponse::from(result))?;
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EXIT_USAGE;
    use natlas_catalog::Catalog;

    fn ctx(config: CliConfig) -> AppContext {
        AppContext::new(config, Catalog::builtin().unwrap())
    }

    fn run(args: &ListArgs, ctx: &AppContext) -> (u8, serde_json::Value) {
        let mut out = Vec::new();
        let code = run_list(args, ctx, &mut out).unwrap();
        let body = if out.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&out).unwrap()
        };
        (code, body)
    }

    #[test]
    fn filter_pairs_parse() {
        assert_eq!(parse_filter("tag=x"), Ok(("tag".into(), "x".into())));
        assert_eq!(parse_filter("tag="), Ok(("tag".into(), String::new())));
        assert_eq!(parse_filter("a=b=c"), Ok(("a".into(), "b=c".into())));
        assert!(parse_filter("tag").is_err());
        assert!(parse_filter("=x").is_err());
    }

    #[test]
    fn config_defaults_fill_missing_flags_only() {
        let config = CliConfig {
            default_sort: Some("gdp".into()),
            default_order: Some("desc".into()),
            default_limit: Some(5),
            ..CliConfig::default()
        };
        let args = ListArgs {
            order: Some("asc".into()),
            ..ListArgs::default()
        };
        let pairs = args.query_pairs(&config);
        assert_eq!(
            pairs,
            [
                ("sort".to_string(), "gdp".to_string()),
                ("order".to_string(), "asc".to_string()),
                ("limit".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn default_list_prints_everything() {
        let ctx = ctx(CliConfig::default());
        let (code, body) = run(&ListArgs::default(), &ctx);
        assert_eq!(code, EXIT_OK);
        assert_eq!(body["meta"]["total"], ctx.catalog.len());
        assert_eq!(body["meta"]["hasMore"], false);
    }

    #[test]
    fn config_limit_applies() {
        let ctx = ctx(CliConfig {
            default_sort: Some("gdp".into()),
            default_order: Some("desc".into()),
            default_limit: Some(2),
            ..CliConfig::default()
        });
        let (code, body) = run(&ListArgs::default(), &ctx);
        assert_eq!(code, EXIT_OK);
        assert_eq!(body["data"][0]["code"], "USA");
        assert_eq!(body["data"][1]["code"], "CHN");
        assert_eq!(body["meta"]["hasMore"], true);
    }

    #[test]
    fn passthrough_filters_are_echoed() {
        let args = ListArgs {
            region: Some("oceania".into()),
            filters: vec![("tag".into(), "x".into())],
            ..ListArgs::default()
        };
        let (_, body) = run(&args, &ctx(CliConfig::default()));
        assert_eq!(
            body["meta"]["filters"],
            serde_json::json!({ "region": "oceania", "tag": "x" })
        );
    }

    #[test]
    fn malformed_parameter_exits_with_usage() {
        let args = ListArgs {
            sort: Some("unknown".into()),
            ..ListArgs::default()
        };
        let (code, body) = run(&args, &ctx(CliConfig::default()));
        assert_eq!(code, EXIT_USAGE);
        assert!(body.is_null());
    }

    #[test]
    fn malformed_config_default_is_rejected_too() {
        let ctx = ctx(CliConfig {
            default_order: Some("sideways".into()),
            ..CliConfig::default()
        });
        let (code, _) = run(&ListArgs::default(), &ctx);
        assert_eq!(code, EXIT_USAGE);
    }
}
