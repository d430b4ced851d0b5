pub mod atmosphere_system;
pub mod constants;
pub mod errors;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use errors::SimulationError;

// Re-export commonly used items from atmosphere_system
pub use atmosphere_system::atmosphere::{AtmosphereModel, AtmosphericLayer};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::report::{write_report, REPORT_HEADER};
pub use trajectory_system::trajectory::{load_trajectory, Sample, Trajectory};

// Re-export commonly used utilities
pub use utils::timer::ScopeTimer;
