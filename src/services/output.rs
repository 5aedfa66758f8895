use crate::domain::models::{AppEntry, BatteryReport, DeviceReport, SystemInfo};
use crate::services::battery::{health_label, status_label};
use std::path::Path;

pub fn print_system(info: &SystemInfo) {
    println!("\nsystem information:");
    println!("model: {}", field(&info.model));
    println!("os version: {}", field(&info.os_version));
    println!("build number: {}", field(&info.build_number));
    println!("processor: {}", field(&info.processor));
    println!("memory: {}", field(&info.memory));
    println!("battery: {}", field(&info.battery));
    println!("network: {}", info.network);
}

pub fn print_apps(apps: &[AppEntry]) {
    println!("\ninstalled applications ({}):", apps.len());
    for app in apps {
        println!("{}\t{}", app.package, app.path);
    }
}

pub fn print_battery(report: &BatteryReport) {
    println!("\nbattery report:");
    match (report.level, report.scale) {
        (Some(level), Some(scale)) => println!("level: {}/{}", level, scale),
        (Some(level), None) => println!("level: {}", level),
        _ => {}
    }
    if let Some(code) = report.status {
        println!("status: {}", labeled(code, status_label));
    }
    if let Some(code) = report.health {
        println!("health: {}", labeled(code, health_label));
    }
    if let Some(ac) = report.ac_powered {
        println!("ac powered: {}", ac);
    }
    if let Some(usb) = report.usb_powered {
        println!("usb powered: {}", usb);
    }
    if let Some(wireless) = report.wireless_powered {
        println!("wireless powered: {}", wireless);
    }
    if let Some(voltage) = report.voltage {
        println!("voltage: {} mV", voltage);
    }
    if let Some(tenths) = report.temperature {
        println!("temperature: {:.1} C", tenths as f32 / 10.0);
    }
    if let Some(technology) = &report.technology {
        println!("technology: {}", technology);
    }
}

pub fn export_json(report: &DeviceReport, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(report)?)?;
    println!("data exported to {}", path.display());
    Ok(())
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("n/a")
}

fn labeled(code: u32, label: fn(u32) -> Option<&'static str>) -> String {
    match label(code) {
        Some(name) => name.to_string(),
        None => code.to_string(),
    }
}
