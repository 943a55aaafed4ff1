//! Domain Layer
//!
//! The core of fpsync: turning a declarative plan into validated sync tasks.
//!
//! ## Structure
//!
//! - `entities/` - Tasks, plans and the environment precondition
//! - `value_objects/` - Immutable value types (PlatformFamily, ValidationMode, errors)
//! - `services/` - Path resolution, merging and validation
//! - `policies/` - Severity rules (ValidationPolicy)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or process environment directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
