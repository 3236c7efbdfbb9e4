//! Domain Layer
//!
//! The three computations behind the drills, free of console I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Small value types (Operator, InputMode, OutputFormat)
//! - `services/` - Pure computations (arithmetic, trajectory, binary)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never reads stdin or writes stdout directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All input goes through the `InputSource` port

pub mod ports;
pub mod services;
pub mod value_objects;
