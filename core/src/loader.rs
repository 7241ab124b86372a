//! # Target File Loader
//!
//! Reads the flat target list. Every target takes exactly five lines:
//!
//! ```text
//! id
//! name
//! host
//! port
//! service
//! ```
//!
//! A missing file is replaced by a default configuration before loading, so
//! the board always has something to show on a first run. Anything else that
//! does not fit the format is rejected here; the probe engine trusts its input.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use hexwatch_common::error::ConfigError;
use hexwatch_common::network::target::{Target, TargetId};
use tracing::{debug, info};

pub const LINES_PER_TARGET: usize = 5;

const DEFAULT_CONFIG: [&str; 10] = [
    "1",
    "Google DNS",
    "8.8.8.8",
    "53",
    "DNS",
    "2",
    "Cloudflare DNS",
    "1.1.1.1",
    "80",
    "Portal",
];

/// Loads the targets stored at `path`, materializing the default file first
/// when nothing exists there yet.
pub fn load_targets(path: &Path) -> Result<Vec<Target>, ConfigError> {
    if !path.exists() {
        write_default(path)?;
        info!("No target file found, created {} with defaults", path.display());
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    let targets = parse_targets(&content)
        .map_err(|reason| ConfigError::malformed(path, reason))?;

    info!("Loaded {} targets from {}", targets.len(), path.display());
    Ok(targets)
}

pub fn write_default(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
    }

    let mut content = DEFAULT_CONFIG.join("\n");
    content.push('\n');
    fs::write(path, content).map_err(|e| ConfigError::io(path, e))
}

/// Parses the five-line groups of a target file.
///
/// The error is a human readable reason naming the offending line.
pub fn parse_targets(content: &str) -> Result<Vec<Target>, String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let lines: Vec<&str> = content.lines().map(str::trim).collect();

    if lines.is_empty() {
        return Err("no targets defined".to_string());
    }
    if lines.len() % LINES_PER_TARGET != 0 {
        return Err(format!(
            "{} lines is not a multiple of {LINES_PER_TARGET}",
            lines.len()
        ));
    }

    let mut seen: HashSet<TargetId> = HashSet::new();
    let mut targets: Vec<Target> = Vec::with_capacity(lines.len() / LINES_PER_TARGET);

    for (idx, group) in lines.chunks_exact(LINES_PER_TARGET).enumerate() {
        let first_line = idx * LINES_PER_TARGET + 1;
        let target = parse_group(group, first_line)?;

        if !seen.insert(target.id.clone()) {
            return Err(format!("line {first_line}: duplicate id '{}'", target.id));
        }
        debug!("Parsed target {} -> {}", target.id, target.endpoint());
        targets.push(target);
    }

    Ok(targets)
}

fn parse_group(group: &[&str], first_line: usize) -> Result<Target, String> {
    let [id, name, host, port, service] = group else {
        return Err(format!("line {first_line}: incomplete target"));
    };

    for (offset, (field, value)) in [("id", id), ("name", name), ("host", host)]
        .into_iter()
        .enumerate()
    {
        if value.is_empty() {
            let line = first_line + offset;
            return Err(format!("line {line}: {field} cannot be empty"));
        }
    }

    let port_line = first_line + 3;
    let port: u16 = port
        .parse()
        .map_err(|e| format!("line {port_line}: invalid port '{port}': {e}"))?;
    if port == 0 {
        return Err(format!("line {port_line}: port must be between 1 and 65535"));
    }

    Ok(Target::new(*id, *name, *host, port, *service))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
