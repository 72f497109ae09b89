use skiff_client::ClientConfig;
use skiff_types::VersionResponse;

pub fn version_command(config: &ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    let report = VersionResponse {
        client: Some(config.client_version()),
        server: None,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
