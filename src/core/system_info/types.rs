use std::fmt;

/// Maximum byte lengths for text facts
pub const CPU_MODEL_MAX_LEN: usize = 100;
pub const OS_NAME_MAX_LEN: usize = 256;
pub const KERNEL_VERSION_MAX_LEN: usize = 256;
pub const HOSTNAME_MAX_LEN: usize = 256;

/// Owned text with an enforced maximum byte length.
///
/// Input longer than the limit is cut at the last char boundary that fits,
/// and `truncated` records that it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedText {
    value: String,
    truncated: bool,
}

impl BoundedText {
    pub fn new<S: Into<String>>(text: S, max_len: usize) -> Self {
        let mut value = text.into();
        if value.len() <= max_len {
            return Self {
                value,
                truncated: false,
            };
        }

        let mut cut = max_len;
        while !value.is_char_boundary(cut) {
            cut -= 1;
        }
        value.truncate(cut);

        Self {
            value,
            truncated: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for BoundedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Uptime split into calendar-free components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UptimeBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// Creation date of the root filesystem. Not validated against a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootfsDate {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

/// Unit used to display memory amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemoryUnit {
    Kilobytes,
    #[default]
    Gigabytes,
}

impl MemoryUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            MemoryUnit::Kilobytes => "kB",
            MemoryUnit::Gigabytes => "GB",
        }
    }
}

impl fmt::Display for MemoryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A fact that was requested: either read successfully or replaced by
/// the "Unknown" placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading<T> {
    Known(T),
    Unknown,
}

impl<T> Reading<T> {
    pub fn known(&self) -> Option<&T> {
        match self {
            Reading::Known(value) => Some(value),
            Reading::Unknown => None,
        }
    }
}

/// CPU facts
#[derive(Debug, Clone, PartialEq)]
pub struct CpuFacts {
    pub model: Reading<String>,
    /// Present only when extra CPU info was requested
    pub topology: Option<CpuTopology>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CpuTopology {
    pub cores: Reading<u32>,
    pub threads: Reading<u32>,
}

/// Raw memory readings in kilobytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryFacts {
    pub total_kb: u64,
    pub available_kb: u64,
}

impl MemoryFacts {
    /// Total minus available, clamped at zero for malformed input.
    pub fn used_kb(&self) -> u64 {
        self.total_kb.saturating_sub(self.available_kb)
    }
}

/// Operating system identification
#[derive(Debug, Clone, PartialEq)]
pub struct OsFacts {
    pub pretty_name: Reading<String>,
    pub platform: &'static str,
}

/// Everything collected in one run. `None` means the section was not requested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemFacts {
    pub cpu: Option<CpuFacts>,
    pub memory: Option<Reading<MemoryFacts>>,
    pub hostname: Option<Reading<String>>,
    pub os: Option<OsFacts>,
    pub kernel: Option<Reading<String>>,
    pub uptime: Option<Reading<u64>>,
    pub rootfs_birth: Option<RootfsDate>,
}
