use crate::cli::Cli;
use crate::domain::models::DeviceReport;
use crate::services::adb::Adb;
use crate::services::{apps, battery, output, sysinfo};
use anyhow::Context;
use tracing::info;

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let adb = Adb::new(&cli.adb, cli.serial.as_deref());

    let devices = adb
        .devices()
        .context("cannot query adb for attached devices")?;
    let ready: Vec<_> = devices.iter().filter(|d| d.is_ready()).collect();
    if ready.is_empty() {
        anyhow::bail!("no devices connected; attach a device and enable USB debugging");
    }
    if let Some(serial) = &cli.serial {
        if !ready.iter().any(|d| d.serial == *serial) {
            anyhow::bail!("device {} is not connected", serial);
        }
    }
    info!("{} device(s) attached", ready.len());

    let collect_all = cli.collect_all();
    let mut report = DeviceReport::default();

    if cli.system || collect_all {
        let system = sysinfo::collect(&adb);
        output::print_system(&system);
        report.system = Some(system);
    }
    if cli.apps || collect_all {
        let apps = apps::collect(&adb);
        output::print_apps(&apps);
        report.apps = Some(apps);
    }
    if cli.battery || collect_all {
        let battery = battery::collect(&adb);
        output::print_battery(&battery);
        report.battery = Some(battery);
    }

    if cli.json {
        output::export_json(&report, &cli.output)?;
    }
    Ok(())
}
