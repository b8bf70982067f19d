//! Free-text client metadata entered alongside the selection

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientInfo {
    pub company_name: String,
    pub contact_name: String,
    pub segments: String,
    pub brand_name: String,
}

impl ClientInfo {
    pub fn company(&self) -> Option<&str> {
        non_blank(&self.company_name)
    }

    pub fn contact(&self) -> Option<&str> {
        non_blank(&self.contact_name)
    }

    pub fn segments(&self) -> Option<&str> {
        non_blank(&self.segments)
    }

    /// Brand name to print, falling back to the configured default
    pub fn brand_name_or<'a>(&'a self, default: &'a str) -> &'a str {
        non_blank(&self.brand_name).unwrap_or(default)
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_absent() {
        let client = ClientInfo {
            company_name: "  ".to_string(),
            contact_name: String::new(),
            segments: "\t".to_string(),
            brand_name: String::new(),
        };
        assert_eq!(client.company(), None);
        assert_eq!(client.contact(), None);
        assert_eq!(client.segments(), None);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let client = ClientInfo {
            company_name: " ACME Corp ".to_string(),
            ..Default::default()
        };
        assert_eq!(client.company(), Some("ACME Corp"));
    }

    #[test]
    fn test_brand_name_default() {
        let mut client = ClientInfo::default();
        assert_eq!(client.brand_name_or("Crewline"), "Crewline");

        client.brand_name = " Partner Co ".to_string();
        assert_eq!(client.brand_name_or("Crewline"), "Partner Co");
    }

    #[test]
    fn test_deserialize_partial_json() {
        let client: ClientInfo = serde_json::from_str(r#"{"companyName": "ACME"}"#).unwrap();
        assert_eq!(client.company_name, "ACME");
        assert!(client.contact_name.is_empty());
    }
}
