use anyhow::Result;

/// Prints the JSON schema of `config.toml` for editor integration.
fn main() -> Result<()> {
    let schema = paintbox::Config::json_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
