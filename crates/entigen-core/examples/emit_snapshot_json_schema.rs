use entigen_core::snapshot_json_schema;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schema = snapshot_json_schema()?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
