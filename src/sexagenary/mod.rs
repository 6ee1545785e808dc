//! Stem-branch (干支) cycle
//!
//! The ten celestial stems and twelve terrestrial branches each form a
//! closed cycle. Stepping both together yields the sixty-place sexagenary
//! cycle used to name years, months, days and double-hours.
//!
//! # Main Components
//!
//! - `stem`: [`CelestialStem`], the 10-cycle
//! - `branch`: [`TerrestrialBranch`], the 12-cycle, with its double-hour,
//!   month and [`ZodiacSign`] correspondences
//! - `term`: [`SexagenaryTerm`], the 60-cycle of valid pairs

pub mod branch;
pub mod stem;
pub mod term;

// Re-export primary types for convenience
pub use self::branch::{TerrestrialBranch, ZodiacSign};
pub use self::stem::CelestialStem;
pub use self::term::SexagenaryTerm;
