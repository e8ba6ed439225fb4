//! Domain Layer
//!
//! The core of Opener - comparison logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Feedback log, action groups, the opener being edited
//! - `value_objects/` - Immutable value types (ActionId, Job)
//! - `services/` - Opener comparison and shift detection
//! - `ports/` - Interface definitions for infrastructure (catalog, groups)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Injected data** - Action names and groups come through ports, never globals
//! 3. **Ports & Adapters** - Game data lookups go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
