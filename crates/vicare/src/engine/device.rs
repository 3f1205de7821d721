use serde::Serialize;

/// A device in the engine.
///
/// A device represents a physical or logical device that contains one or more entities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceInfo {
    /// (domain, identifier) pairs naming this device
    pub identifiers: Vec<(String, String)>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
}

impl DeviceInfo {
    pub fn new(name: String) -> Self {
        Self {
            identifiers: Vec::new(),
            name,
            manufacturer: None,
        }
    }

    pub fn with_identifier(mut self, domain: &str, id: &str) -> Self {
        let pair = (domain.to_string(), id.to_string());
        if !self.identifiers.contains(&pair) {
            self.identifiers.push(pair);
        }
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: &str) -> Self {
        self.manufacturer = Some(manufacturer.to_string());
        self
    }
}
