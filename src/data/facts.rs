//! Ordered set of labelled facts

use crate::config::DisplayConfig;

/// Every fact sysfetch knows, in display order.
///
/// The order decides which art line each fact sits next to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactKind {
    User,
    Hostname,
    Os,
    Kernel,
    Uptime,
    Shell,
    Cpu,
    Gpu,
    Memory,
}

impl FactKind {
    pub const ALL: [FactKind; 9] = [
        FactKind::User,
        FactKind::Hostname,
        FactKind::Os,
        FactKind::Kernel,
        FactKind::Uptime,
        FactKind::Shell,
        FactKind::Cpu,
        FactKind::Gpu,
        FactKind::Memory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FactKind::User => "User",
            FactKind::Hostname => "Host",
            FactKind::Os => "OS",
            FactKind::Kernel => "Kernel",
            FactKind::Uptime => "Uptime",
            FactKind::Shell => "Shell",
            FactKind::Cpu => "CPU",
            FactKind::Gpu => "GPU",
            FactKind::Memory => "Memory",
        }
    }

    pub fn is_enabled(self, display: &DisplayConfig) -> bool {
        match self {
            FactKind::User => display.show_user,
            FactKind::Hostname => display.show_hostname,
            FactKind::Os => display.show_os,
            FactKind::Kernel => display.show_kernel,
            FactKind::Uptime => display.show_uptime,
            FactKind::Shell => display.show_shell,
            FactKind::Cpu => display.show_cpu,
            FactKind::Gpu => display.show_gpu,
            FactKind::Memory => display.show_memory,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub kind: FactKind,
    pub value: String,
}

impl Fact {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactSet {
    facts: Vec<Fact>,
}

impl FactSet {
    /// Build from the enabled facts only; `collect` is not called for
    /// disabled ones so their sources are never touched.
    pub fn build<F>(display: &DisplayConfig, mut collect: F) -> Self
    where
        F: FnMut(FactKind) -> String,
    {
        let facts = FactKind::ALL
            .into_iter()
            .filter(|kind| kind.is_enabled(display))
            .map(|kind| Fact {
                kind,
                value: collect(kind),
            })
            .collect();

        FactSet { facts }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    pub fn get(&self, kind: FactKind) -> Option<&str> {
        self.facts
            .iter()
            .find(|fact| fact.kind == kind)
            .map(|fact| fact.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_yield_all_nine_in_order() {
        let set = FactSet::build(&DisplayConfig::default(), |kind| kind.label().to_lowercase());
        let labels: Vec<_> = set.iter().map(Fact::label).collect();
        assert_eq!(
            labels,
            ["User", "Host", "OS", "Kernel", "Uptime", "Shell", "CPU", "GPU", "Memory"]
        );
        assert_eq!(set.get(FactKind::Cpu), Some("cpu"));
    }

    #[test]
    fn disabled_facts_are_skipped_and_not_collected() {
        let display = DisplayConfig {
            show_gpu: false,
            show_user: false,
            ..DisplayConfig::default()
        };
        let mut asked = Vec::new();
        let set = FactSet::build(&display, |kind| {
            asked.push(kind);
            String::new()
        });

        assert_eq!(set.len(), 7);
        assert!(!asked.contains(&FactKind::Gpu));
        assert!(!asked.contains(&FactKind::User));
        assert_eq!(set.iter().next().map(|f| f.kind), Some(FactKind::Hostname));
    }
}
