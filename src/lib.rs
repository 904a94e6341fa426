//! AgentPath application library
//!
//! Domain modules (blogs, applications, contact) and the shared validation
//! layer, wired onto the kernel/http/store/mailer crates.

pub mod modules;
pub mod validation;
