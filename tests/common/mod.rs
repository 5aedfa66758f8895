use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Stub adb that answers every probe the collectors issue.
pub const STUB_OK: &str = r#"#!/bin/sh
case "$*" in
  devices)
    printf 'List of devices attached\nemulator-5554\tdevice\n'
    ;;
  *"getprop ro.product.model")
    echo "Pixel 6"
    ;;
  *"getprop ro.build.version.release")
    echo "14"
    ;;
  *"getprop ro.build.display.id")
    echo "AP2A.240805.005"
    ;;
  *cpuinfo*)
    printf 'Processor\t: AArch64 Processor rev 1 (aarch64)\n'
    ;;
  *"dumpsys meminfo")
    printf 'Applications Memory Usage (in Kilobytes):\nUptime: 86400000 Realtime: 86400000\n'
    ;;
  *"dumpsys battery")
    printf 'Current Battery Service state:\n  AC powered: false\n  USB powered: true\n  Wireless powered: false\n  status: 2\n  health: 2\n  level: 93\n  scale: 100\n  voltage: 4156\n  temperature: 275\n  technology: Li-ion\n'
    ;;
  *"dumpsys wifi"*)
    echo "Wi-Fi is enabled"
    ;;
  *"pm list packages -f")
    printf 'package:/data/app/com.example.one-1/base.apk=com.example.one\npackage:/system/app/Settings/Settings.apk=com.android.settings\n'
    ;;
  *)
    echo "unexpected invocation: $*" >&2
    exit 1
    ;;
esac
"#;

/// Stub adb with an empty device table.
pub const STUB_NO_DEVICE: &str = r#"#!/bin/sh
case "$*" in
  devices)
    echo "List of devices attached"
    ;;
  *)
    exit 1
    ;;
esac
"#;

pub struct TestEnv {
    _tmp: TempDir,
    pub adb: PathBuf,
    pub workdir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_stub(STUB_OK)
    }

    pub fn with_stub(script: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let adb = tmp.path().join("adb");
        fs::write(&adb, script).expect("write adb stub");
        let mut perms = fs::metadata(&adb).expect("stat adb stub").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&adb, perms).expect("mark adb stub executable");

        let workdir = tmp.path().join("work");
        fs::create_dir_all(&workdir).expect("create workdir");

        Self {
            _tmp: tmp,
            adb,
            workdir,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("droidinfo").expect("binary under test");
        cmd.current_dir(&self.workdir)
            .env_remove("RUST_LOG")
            .arg("--adb")
            .arg(&self.adb);
        cmd
    }
}
