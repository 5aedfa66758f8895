use std::process::Command;
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum AdbError {
    #[error("cannot run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("command exited with {status}: {message}")]
    Failed {
        status: std::process::ExitStatus,
        message: String,
    },
    #[error("non-utf8 output from adb")]
    NonUtf8(#[from] std::string::FromUtf8Error),
}

/// Attached-device row from `adb devices`.
#[derive(Debug, Clone)]
pub struct DeviceEntry {
    pub serial: String,
    pub state: String,
}

impl DeviceEntry {
    /// adb reports "unauthorized", "offline" and friends; only "device"
    /// means the shell is reachable.
    pub fn is_ready(&self) -> bool {
        self.state == "device"
    }
}

/// Thin wrapper around the external `adb` binary.
///
/// One method, one invocation: no chaining of adb sub-commands on the host
/// side. Remote pipelines are passed through as a single shell action and
/// interpreted by the device's shell.
pub struct Adb {
    program: String,
    serial: Option<String>,
}

impl Adb {
    pub fn new(program: &str, serial: Option<&str>) -> Self {
        Self {
            program: program.to_string(),
            serial: serial.map(str::to_string),
        }
    }

    /// Host-side sub-command, routed to the selected device when a serial
    /// is set.
    pub fn run(&self, args: &[&str]) -> Result<String, AdbError> {
        let mut full: Vec<&str> = Vec::new();
        if let Some(serial) = &self.serial {
            full.extend(["-s", serial.as_str()]);
        }
        full.extend(args);
        self.invoke(&full)
    }

    /// Run an action on the device's default shell.
    pub fn shell(&self, action: &str) -> Result<String, AdbError> {
        self.run(&["shell", action])
    }

    /// Query a single device property by key.
    pub fn getprop(&self, key: &str) -> Result<String, AdbError> {
        self.run(&["shell", "getprop", key])
    }

    /// Header-less list of attached devices and their states.
    pub fn devices(&self) -> Result<Vec<DeviceEntry>, AdbError> {
        Ok(parse_devices(&self.invoke(&["devices"])?))
    }

    fn invoke(&self, args: &[&str]) -> Result<String, AdbError> {
        debug!("running: {} {}", self.program, args.join(" "));
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| AdbError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8(output.stdout)?.trim().to_string();
        if output.status.success() {
            Ok(stdout)
        } else {
            let stderr = String::from_utf8(output.stderr)?.trim().to_string();
            // adb does not reliably route errors to stderr
            let message = if stdout.is_empty() { stderr } else { stdout };
            Err(AdbError::Failed {
                status: output.status,
                message,
            })
        }
    }
}

fn parse_devices(out: &str) -> Vec<DeviceEntry> {
    out.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with("List of devices"))
        .filter(|line| !line.starts_with('*'))
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let serial = fields.next()?;
            let state = fields.next()?;
            Some(DeviceEntry {
                serial: serial.to_string(),
                state: state.to_string(),
            })
        })
        .collect()
}
