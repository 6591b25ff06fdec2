//! Reference data collaborators: standard observer CMF tables, illuminant
//! SPDs, and ingestion of measured SPDs from files.
//!
//! The computation core only ever reads these; it never depends on where
//! the data came from.

pub mod cmfs;
pub mod illuminants;
pub mod loader;

pub use cmfs::{cie_1931_2_degree, standard_observer, CIE_1931_2_DEGREE};
pub use illuminants::illuminant;
pub use loader::load_spd;
