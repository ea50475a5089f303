//! String parsing utilities

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Extract value after a colon and space
pub fn extract_after_colon(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Shorten a raw kernel string.
///
/// `"... #1 SMP PREEMPT_DYNAMIC ..."` keeps everything up to and including
/// `SMP`. Without `SMP`, the text is cut after the token that follows the
/// first `#`. Anything else is returned as-is.
pub fn shorten_kernel(raw: &str) -> String {
    if let Some(pos) = raw.find("SMP") {
        return format!("{}SMP", &raw[..pos]);
    }

    if let Some(pos) = raw.find('#') {
        let before = &raw[..pos];
        let build = raw[pos + 1..].split_whitespace().next().unwrap_or("");
        return format!("{}#{}", before, build);
    }

    raw.to_string()
}

/// Format uptime from seconds, omitting the day field when it is zero
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3600;
    let minutes = (seconds % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else {
        format!("{}h {}m", hours, minutes)
    }
}

/// `"{percent}% ({used}GB/{total}GB)"`, every number to one decimal
pub fn format_memory(used_bytes: u64, total_bytes: u64) -> String {
    let percent = if total_bytes == 0 {
        0.0
    } else {
        round1(used_bytes as f64 / total_bytes as f64 * 100.0)
    };
    let used_gb = round1(used_bytes as f64 / GIB);
    let total_gb = round1(total_bytes as f64 / GIB);

    format!("{:.1}% ({:.1}GB/{:.1}GB)", percent, used_gb, total_gb)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Drop registered / trademark markers in both ASCII and symbol form
pub fn strip_trademarks(name: &str) -> String {
    ["(R)", "(r)", "(TM)", "(tm)", "®", "™"]
        .iter()
        .fold(name.to_string(), |acc, mark| acc.replace(*mark, ""))
}

/// Clean a `/proc/cpuinfo` model name for display
pub fn clean_cpu_name(raw: &str) -> String {
    strip_trademarks(raw)
        .split_whitespace()
        .filter(|word| *word != "CPU")
        .collect::<Vec<_>>()
        .join(" ")
}

/// Last path component, e.g. `/usr/bin/zsh` -> `zsh`
pub fn basename(path: &str) -> Option<&str> {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_with_smp_ends_at_smp() {
        let raw = "6.1.0-13-amd64 #1 SMP PREEMPT_DYNAMIC Debian 6.1.55-1 (2023-09-29)";
        let short = shorten_kernel(raw);
        assert_eq!(short, "6.1.0-13-amd64 #1 SMP");
        assert!(short.ends_with("SMP"));
    }

    #[test]
    fn kernel_with_build_number_only() {
        assert_eq!(
            shorten_kernel("5.15.0-rpi #3 Fri Oct 6 12:00:00 UTC 2023"),
            "5.15.0-rpi #3"
        );
        assert_eq!(
            shorten_kernel("6.5.0-14-generic #3-Ubuntu Tue Nov 14"),
            "6.5.0-14-generic #3-Ubuntu"
        );
    }

    #[test]
    fn kernel_without_markers_is_untouched() {
        assert_eq!(shorten_kernel("6.9.1-arch1-1"), "6.9.1-arch1-1");
    }

    #[test]
    fn uptime_hides_zero_days() {
        assert_eq!(format_uptime(5 * 3600 + 30 * 60), "5h 30m");
        assert_eq!(format_uptime(2 * 86_400 + 3600), "2d 1h 0m");
        assert_eq!(format_uptime(59), "0h 0m");
    }

    #[test]
    fn memory_uses_one_decimal() {
        let gib = 1024 * 1024 * 1024;
        assert_eq!(format_memory(3 * gib, 16 * gib), "18.8% (3.0GB/16.0GB)");
        assert_eq!(format_memory(0, 0), "0.0% (0.0GB/0.0GB)");
    }

    #[test]
    fn cpu_name_loses_marks_and_word_cpu() {
        assert_eq!(
            clean_cpu_name("Intel(R) Core(TM) i7-8700 CPU @ 3.20GHz"),
            "Intel Core i7-8700 @ 3.20GHz"
        );
        assert_eq!(
            clean_cpu_name("AMD Ryzen 7 5800X 8-Core Processor"),
            "AMD Ryzen 7 5800X 8-Core Processor"
        );
    }

    #[test]
    fn colon_value_and_basename() {
        assert_eq!(
            extract_after_colon("model name\t: Foo Bar").as_deref(),
            Some("Foo Bar")
        );
        assert_eq!(extract_after_colon("empty:   "), None);
        assert_eq!(basename("/usr/bin/zsh"), Some("zsh"));
        assert_eq!(basename("fish"), Some("fish"));
        assert_eq!(basename(""), None);
    }
}
