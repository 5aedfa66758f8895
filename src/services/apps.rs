use crate::domain::models::AppEntry;
use crate::services::adb::Adb;
use tracing::warn;

const PACKAGE_PREFIX: &str = "package:";

pub fn collect(adb: &Adb) -> Vec<AppEntry> {
    match adb.shell("pm list packages -f") {
        Ok(out) => parse_package_list(&out),
        Err(err) => {
            warn!("package listing failed: {}", err);
            Vec::new()
        }
    }
}

/// Each line is `package:<apk path>=<package name>`. The split happens at
/// the last `=` because apk paths may contain one, package names never do.
pub(crate) fn parse_package_list(out: &str) -> Vec<AppEntry> {
    out.lines()
        .filter_map(|line| {
            let entry = line.trim().strip_prefix(PACKAGE_PREFIX)?;
            let (path, package) = entry.rsplit_once('=')?;
            Some(AppEntry {
                package: package.to_string(),
                path: path.to_string(),
            })
        })
        .collect()
}
