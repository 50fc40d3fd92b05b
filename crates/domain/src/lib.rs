//! # deviceterm-domain
//!
//! Pure domain model for the deviceterm service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Devices** as read from the inventory (name plus primary addresses)
//! - Define **Terminal settings** (where the web terminal service lives)
//! - Resolve which address a terminal should connect to and build the
//!   embed URL handed to the terminal service
//! - Describe the plugin itself (name, version, default mount path)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod plugin;

pub mod device;
pub mod terminal;
