//! # deviceterm-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceRepository` — read access to the inventory's devices
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DeviceService` — list, get
//!   - `TerminalService` — resolve a device into a terminal embed URL
//! - Orchestrate domain objects without knowing *how* the inventory is stored
//!
//! ## Dependency rule
//! Depends on `deviceterm-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
