use schemars::schema_for;

use crate::model::GradeWeights;

/// JSON Schema for the grading weight configuration, pretty-printed.
pub fn schema_json() -> anyhow::Result<String> {
    let schema = schema_for!(GradeWeights);
    Ok(serde_json::to_string_pretty(&schema)?)
}

/// CLI entry point for the `schema` subcommand.
pub fn run() -> anyhow::Result<()> {
    println!("{}", schema_json()?);
    Ok(())
}
