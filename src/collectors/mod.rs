//! Fact collectors. Each one reads the live system and degrades to a
//! placeholder instead of failing.

pub mod hardware;
pub mod system;

use crate::data::FactKind;

/// Run the collector behind one fact
pub fn collect(kind: FactKind) -> String {
    match kind {
        FactKind::User => system::username(),
        FactKind::Hostname => system::hostname(),
        FactKind::Os => system::os_name(),
        FactKind::Kernel => system::kernel_version(),
        FactKind::Uptime => system::uptime(),
        FactKind::Shell => system::shell(),
        FactKind::Cpu => hardware::cpu_model(),
        FactKind::Gpu => hardware::gpu_model(),
        FactKind::Memory => hardware::memory_usage(),
    }
}
