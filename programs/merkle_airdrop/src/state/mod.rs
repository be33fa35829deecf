pub mod registry_state;
pub mod distribution_state;
pub mod claim_state;

pub use registry_state::*;
pub use distribution_state::*;
pub use claim_state::*;
