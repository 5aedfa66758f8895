use serde::{Deserialize, Serialize};

/// Fixed-key snapshot of the device's system properties.
///
/// Every probe is independent; a failed probe leaves its key absent rather
/// than aborting the collection.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct SystemInfo {
    pub model: Option<String>,
    pub os_version: Option<String>,
    pub build_number: Option<String>,
    pub processor: Option<String>,
    pub memory: Option<String>,
    pub battery: Option<String>,
    pub network: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppEntry {
    pub package: String,
    pub path: String,
}

/// Parsed `dumpsys battery` block.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct BatteryReport {
    pub ac_powered: Option<bool>,
    pub usb_powered: Option<bool>,
    pub wireless_powered: Option<bool>,
    pub status: Option<u32>,
    pub health: Option<u32>,
    pub level: Option<u32>,
    pub scale: Option<u32>,
    pub voltage: Option<u32>,
    pub temperature: Option<i32>,
    pub technology: Option<String>,
}

/// Envelope for the JSON export; only the sections that were collected in
/// this run are present.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct DeviceReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apps: Option<Vec<AppEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery: Option<BatteryReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_round_trips_through_json() {
        let report = DeviceReport {
            system: Some(SystemInfo {
                model: Some("Pixel 6".to_string()),
                os_version: Some("14".to_string()),
                build_number: None,
                processor: None,
                memory: Some("Applications Memory Usage (in Kilobytes):".to_string()),
                battery: None,
                network: "Wi-Fi is enabled".to_string(),
            }),
            apps: Some(vec![AppEntry {
                package: "com.example.one".to_string(),
                path: "/data/app/com.example.one-1/base.apk".to_string(),
            }]),
            battery: None,
        };

        let raw = serde_json::to_string_pretty(&report).expect("serialize report");
        let back: DeviceReport = serde_json::from_str(&raw).expect("deserialize report");
        assert_eq!(back, report);
    }

    #[test]
    fn absent_sections_are_omitted_from_the_export() {
        let raw = serde_json::to_string(&DeviceReport::default()).expect("serialize report");
        assert_eq!(raw, "{}");
    }
}
