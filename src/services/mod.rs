//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic so route handlers can stay focused
//! on protocol translation: prompt assembly from the profile document and
//! the password gate check.

pub mod gate;
pub mod prompt;
