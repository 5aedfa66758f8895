use crate::domain::models::BatteryReport;
use crate::services::adb::Adb;
use tracing::warn;

pub fn collect(adb: &Adb) -> BatteryReport {
    match adb.shell("dumpsys battery") {
        Ok(out) => parse_battery(&out),
        Err(err) => {
            warn!("battery query failed: {}", err);
            BatteryReport::default()
        }
    }
}

/// Extract the indented `key: value` block under
/// `Current Battery Service state:`. Keys this tool does not model are
/// skipped, so newer Android releases degrade gracefully.
pub(crate) fn parse_battery(out: &str) -> BatteryReport {
    let mut report = BatteryReport::default();
    for line in out.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "AC powered" => report.ac_powered = value.parse().ok(),
            "USB powered" => report.usb_powered = value.parse().ok(),
            "Wireless powered" => report.wireless_powered = value.parse().ok(),
            "status" => report.status = value.parse().ok(),
            "health" => report.health = value.parse().ok(),
            "level" => report.level = value.parse().ok(),
            "scale" => report.scale = value.parse().ok(),
            "voltage" => report.voltage = value.parse().ok(),
            "temperature" => report.temperature = value.parse().ok(),
            "technology" => report.technology = Some(value.to_string()),
            _ => {}
        }
    }
    report
}

/// android.os.BatteryManager BATTERY_STATUS_* codes.
pub(crate) fn status_label(code: u32) -> Option<&'static str> {
    match code {
        1 => Some("unknown"),
        2 => Some("charging"),
        3 => Some("discharging"),
        4 => Some("not charging"),
        5 => Some("full"),
        _ => None,
    }
}

/// android.os.BatteryManager BATTERY_HEALTH_* codes.
pub(crate) fn health_label(code: u32) -> Option<&'static str> {
    match code {
        1 => Some("unknown"),
        2 => Some("good"),
        3 => Some("overheat"),
        4 => Some("dead"),
        5 => Some("over voltage"),
        6 => Some("unspecified failure"),
        7 => Some("cold"),
        _ => None,
    }
}
