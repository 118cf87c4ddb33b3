pub mod collector;
pub mod convert;
pub mod cpu;
pub mod memory;
pub mod os;
pub mod rootfs;
pub mod scanner;
pub mod types;
pub mod uptime;

pub use collector::collect_system_info;
pub use types::*;
