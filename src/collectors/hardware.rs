//! Hardware information collection (CPU, GPU, Memory)

use crate::error::{Result, SysfetchError};
use crate::utils::command::{command_exists, run_command};
use crate::utils::file::{find_line, read_file_safe};
use crate::utils::parsing::{clean_cpu_name, extract_after_colon, format_memory, strip_trademarks};
use crate::utils::uts::uname;
use std::io::ErrorKind;
use std::path::Path;

const UNKNOWN: &str = "Unknown";
const UNKNOWN_GPU: &str = "Unknown GPU";
const CPUINFO: &str = "/proc/cpuinfo";
const MEMINFO: &str = "/proc/meminfo";
const GPU_PRODUCT_NAME: &str = "/sys/class/drm/card0/device/product_name";

pub fn cpu_model() -> String {
    read_cpu_model(CPUINFO)
        .or_else(|err| {
            tracing::debug!(%err, "cpuinfo unusable, asking uname");
            processor_name()
        })
        .unwrap_or_else(|_| UNKNOWN.to_string())
}

/// First `model name` entry of a cpuinfo file, cleaned for display
pub fn read_cpu_model<P: AsRef<Path>>(path: P) -> Result<String> {
    let line = find_line(path, |l| l.contains("model name"))?
        .ok_or_else(|| SysfetchError::Detection("no model name in cpuinfo".to_string()))?;

    extract_after_colon(&line)
        .map(|raw| clean_cpu_name(&raw))
        .filter(|name| !name.is_empty())
        .ok_or_else(|| SysfetchError::Parse(format!("bad model name line: {:?}", line)))
}

fn processor_name() -> Result<String> {
    let machine = uname()?.machine;
    if machine.is_empty() {
        Err(SysfetchError::Detection("empty machine name".to_string()))
    } else {
        Ok(machine)
    }
}

pub fn memory_usage() -> String {
    match read_memory_bytes(MEMINFO) {
        Ok((used, total)) => format_memory(used, total),
        Err(err) => {
            tracing::debug!(%err, "meminfo unavailable");
            UNKNOWN.to_string()
        }
    }
}

/// `(used, total)` in bytes, where used is total minus available
pub fn read_memory_bytes<P: AsRef<Path>>(path: P) -> Result<(u64, u64)> {
    let meminfo = read_file_safe(path)?;
    let mut total = None;
    let mut available = None;

    for line in meminfo.lines() {
        if line.starts_with("MemTotal:") {
            total = parse_kib(line);
        } else if line.starts_with("MemAvailable:") {
            available = parse_kib(line);
        }
        if total.is_some() && available.is_some() {
            break;
        }
    }

    match (total, available) {
        (Some(total), Some(available)) => Ok((total.saturating_sub(available), total)),
        _ => Err(SysfetchError::Detection(
            "MemTotal/MemAvailable not found".to_string(),
        )),
    }
}

fn parse_kib(line: &str) -> Option<u64> {
    line.split_whitespace()
        .nth(1)
        .and_then(|value| value.parse::<u64>().ok())
        .map(|kib| kib * 1024)
}

/// GPU model from sysfs, then `lspci`. Failures are logged, never returned.
pub fn gpu_model() -> String {
    match detect_gpu(Path::new(GPU_PRODUCT_NAME)) {
        Ok(Some(name)) => name,
        Ok(None) => UNKNOWN_GPU.to_string(),
        Err(err) => {
            tracing::warn!(%err, "GPU detection failed");
            UNKNOWN_GPU.to_string()
        }
    }
}

fn detect_gpu(product_name: &Path) -> Result<Option<String>> {
    match read_file_safe(product_name) {
        Ok(raw) => return Ok(Some(gpu_from_product_name(&raw))),
        Err(SysfetchError::ReadFile { source, .. }) if source.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }

    if !command_exists("lspci") {
        tracing::debug!("no GPU product_name and lspci is not installed");
        return Ok(None);
    }

    let listing = run_command("lspci", &[])?;
    Ok(gpu_from_lspci(&listing))
}

/// Pick the model out of a sysfs `product_name` value.
///
/// AMD lists several marketing names separated by `/`; the `Radeon RX` one
/// is preferred. A blank value gives `Unknown GPU`.
pub fn gpu_from_product_name(raw: &str) -> String {
    let tokens: Vec<&str> = raw.trim().split('/').map(str::trim).collect();

    let chosen = if tokens.len() > 1 {
        tokens
            .iter()
            .find(|token| token.starts_with("Radeon RX"))
            .unwrap_or(&tokens[0])
    } else {
        &tokens[0]
    };

    let name = strip_trademarks(chosen).trim().to_string();
    if name.is_empty() {
        UNKNOWN_GPU.to_string()
    } else {
        name
    }
}

/// First display controller in `lspci` output that a rule recognises
pub fn gpu_from_lspci(listing: &str) -> Option<String> {
    listing
        .lines()
        .filter(|line| is_display_controller(line))
        .find_map(parse_gpu_line)
}

fn is_display_controller(line: &str) -> bool {
    line.contains("VGA compatible controller")
        || line.contains("3D controller")
        || line.contains("Display controller")
}

/// Vendor rules for a single `lspci` line, checked in this order
pub fn parse_gpu_line(line: &str) -> Option<String> {
    if let Some(pos) = line.find("Radeon RX") {
        let rest = &line[pos + "Radeon RX".len()..];
        let model = rest.split(|c: char| c == '[' || c == '/').next().unwrap_or("").trim();
        return Some(format!("AMD Radeon RX {}", model));
    }

    if line.contains("NVIDIA") {
        return line
            .rfind(':')
            .map(|pos| line[pos + 1..].trim().to_string());
    }

    if line.contains("Intel") {
        return Some("Intel Graphics".to_string());
    }

    None
}
