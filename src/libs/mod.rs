pub mod anomaly;
pub mod archetype;
pub mod compare;
pub mod correlation;
pub mod error;
pub mod features;
pub mod io;
pub mod model;
pub mod motif;
pub mod nt;
pub mod policy;
pub mod scan;
pub mod stats;
pub mod summary;
pub mod thermo;
pub mod window;

pub use error::ScanError;
