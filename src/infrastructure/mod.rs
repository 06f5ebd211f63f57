pub mod command;
pub mod proc_net;
pub mod resolver;
pub mod route;

#[cfg(target_os = "linux")]
pub mod ioctl;
