use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_EXPORT_PATH: &str = "device_info.json";
pub const DEFAULT_LOG_PATH: &str = "device.log";

#[derive(Parser, Debug)]
#[command(name = "droidinfo", version, about = "Android device inventory over ADB")]
pub struct Cli {
    #[arg(long, help = "Export collected data to a JSON file")]
    pub json: bool,
    #[arg(long, help = "Collect system information")]
    pub system: bool,
    #[arg(long, help = "Collect the installed application list")]
    pub apps: bool,
    #[arg(long, help = "Collect the battery report")]
    pub battery: bool,
    #[arg(long, help = "Enable logging to a file")]
    pub log: bool,
    #[arg(short, long, help = "Serial of the device to query (adb -s)")]
    pub serial: Option<String>,
    #[arg(long, default_value = "adb", help = "Path of the adb binary")]
    pub adb: String,
    #[arg(
        short,
        long,
        default_value = DEFAULT_EXPORT_PATH,
        help = "Destination of the JSON export"
    )]
    pub output: PathBuf,
    #[arg(
        long,
        default_value = DEFAULT_LOG_PATH,
        help = "Log destination used with --log"
    )]
    pub log_file: PathBuf,
}

impl Cli {
    /// Without an explicit section flag every section is collected.
    pub fn collect_all(&self) -> bool {
        !(self.system || self.apps || self.battery)
    }
}
