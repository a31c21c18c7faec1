//! Skill Catalog: the seed skill areas the assessment is built from.
//!
//! Generated questions replace the seed questions area by area (matched by name);
//! when generation fails the seed catalog is served unmodified.

mod seed;

pub use seed::seed_skill_areas;
