use crate::domain::models::SystemInfo;
use crate::services::adb::Adb;
use tracing::warn;

// Pipelines run on the device's shell; only the result crosses the bridge.
const PROCESSOR_PROBE: &str = "cat /proc/cpuinfo | grep 'Processor' | head -n 1";
const WIFI_PROBE: &str = "dumpsys wifi | grep 'Wi-Fi'";

pub const NO_WIFI: &str = "No Wi-Fi connection";

pub fn collect(adb: &Adb) -> SystemInfo {
    SystemInfo {
        model: probe_prop(adb, "ro.product.model"),
        os_version: probe_prop(adb, "ro.build.version.release"),
        build_number: probe_prop(adb, "ro.build.display.id"),
        processor: probe_shell(adb, PROCESSOR_PROBE),
        memory: probe_shell(adb, "dumpsys meminfo").and_then(|out| first_line(&out)),
        battery: probe_shell(adb, "dumpsys battery").and_then(|out| first_line(&out)),
        network: probe_shell(adb, WIFI_PROBE).unwrap_or_else(|| NO_WIFI.to_string()),
    }
}

fn probe_prop(adb: &Adb, key: &str) -> Option<String> {
    match adb.getprop(key) {
        Ok(value) if !value.is_empty() => Some(value),
        Ok(_) => None,
        Err(err) => {
            warn!("getprop {} failed: {}", key, err);
            None
        }
    }
}

fn probe_shell(adb: &Adb, action: &str) -> Option<String> {
    match adb.shell(action) {
        Ok(out) if !out.is_empty() => Some(out),
        Ok(_) => None,
        Err(err) => {
            warn!("shell probe '{}' failed: {}", action, err);
            None
        }
    }
}

pub(crate) fn first_line(text: &str) -> Option<String> {
    text.lines()
        .next()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
}
