use crate::cli::{BuildArgs, BuildKind, Input, OutputFormat};
use crate::config::ProjectConfig;
use crate::render::{self, Binds, Built};
use anyhow::Context;
use serde_json::Value as Json;
use sqlrpn::{QueryBuilder, StatementKind};
use std::io::Read;

pub fn run(args: BuildArgs, project: &ProjectConfig) -> anyhow::Result<()> {
    let doc = read_input(&args.input)?;
    let qb = QueryBuilder::with_config(project.builder_config(args.dialect, args.quote_style));

    let built = build_for(&args, &qb, &doc)?;

    let out = match args.format {
        OutputFormat::Json => render::to_json(&built)?,
        OutputFormat::Text => render::to_text(&built),
    };
    println!("{out}");
    Ok(())
}

fn build_for(args: &BuildArgs, qb: &QueryBuilder, doc: &Json) -> anyhow::Result<Built> {
    build(qb, args.kind, args.table.as_deref(), doc)
        .with_context(|| format!("failed to build {} statement", args.kind.as_str()))
}

/// Run the builder selected by `kind` over a parsed JSON document.
pub fn build(
    qb: &QueryBuilder,
    kind: BuildKind,
    table: Option<&str>,
    doc: &Json,
) -> anyhow::Result<Built> {
    let built = match kind {
        BuildKind::Where => {
            let (sql, binds) = qb.build_where_query_json(doc)?.into_parts();
            Built::new(StatementKind::Where, sql, Binds::Flat(binds))
        }
        BuildKind::Insert => {
            let (sql, rows) = qb.build_insert_query_json(require_table(table)?, doc)?;
            Built::new(StatementKind::Insert, sql, Binds::Rows(rows))
        }
        BuildKind::Update => {
            let (sql, binds) = qb.build_update_query_json(require_table(table)?, doc)?;
            Built::new(StatementKind::Update, sql, Binds::Flat(binds))
        }
        BuildKind::Select => {
            let sql = qb.build_select_query_json(doc)?;
            Built::new(StatementKind::Select, sql, Binds::Flat(Vec::new()))
        }
        BuildKind::Order => {
            let sql = qb.build_order_query_json(doc)?;
            Built::new(StatementKind::Order, sql, Binds::Flat(Vec::new()))
        }
    };
    Ok(built)
}

fn require_table(table: Option<&str>) -> anyhow::Result<&str> {
    table.ok_or_else(|| anyhow::anyhow!("--table is required"))
}

fn read_input(input: &Input) -> anyhow::Result<Json> {
    match input {
        Input::Stdin => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .map_err(|e| anyhow::anyhow!("failed to read stdin: {e}"))?;
            serde_json::from_str(&raw).map_err(|e| anyhow::anyhow!("invalid JSON on stdin: {e}"))
        }
        Input::File(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
            serde_json::from_str(&raw)
                .map_err(|e| anyhow::anyhow!("invalid JSON in {}: {e}", path.display()))
        }
    }
}
