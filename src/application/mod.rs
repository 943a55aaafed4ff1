//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ConfigResolver` - Orchestrates one resolution pass (plan, precondition,
//!   merge, expand, validate)

pub mod resolve;

pub use resolve::{resolve_discovered, ConfigResolver, HostResolver, Resolution, ResolverOptions};
