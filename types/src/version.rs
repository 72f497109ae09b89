use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Version {
    pub version: String,
    pub api_version: String,
    #[serde(
        rename = "MinAPIVersion",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub min_api_version: String,
    #[serde(default)]
    pub git_commit: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub arch: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kernel_version: String,
    #[serde(default)]
    pub experimental: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub build_time: String,
}

/// Version information for the client and, once reached, the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResponse {
    pub client: Option<Version>,
    pub server: Option<Version>,
}

impl VersionResponse {
    /// True when the server answered and its version record was understood.
    pub fn server_ok(&self) -> bool {
        self.server.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_ok_requires_server_record() {
        let mut response = VersionResponse {
            client: Some(Version {
                version: "0.1.0".to_string(),
                api_version: "1.24".to_string(),
                ..Default::default()
            }),
            server: None,
        };
        assert!(!response.server_ok());
        assert!(!VersionResponse::default().server_ok());

        response.server = Some(Version::default());
        assert!(response.server_ok());
    }

    #[test]
    fn test_version_wire_names() {
        let json = r#"{"Version":"1.12.0","ApiVersion":"1.24","GitCommit":"8eab29e","Os":"linux","Arch":"amd64"}"#;
        let v: Version = serde_json::from_str(json).unwrap();
        assert_eq!(v.api_version, "1.24");
        assert_eq!(v.os, "linux");
        assert!(!v.experimental);
    }
}
