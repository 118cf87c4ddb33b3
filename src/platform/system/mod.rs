// Per-platform fact providers

pub mod generic;
pub mod linux;

pub use generic::SysinfoProvider;
pub use linux::LinuxProvider;
