pub mod create_distribution;
pub mod claim;
pub mod check_claimed;
pub mod get_distribution;

pub use create_distribution::*;
pub use claim::*;
pub use check_claimed::*;
pub use get_distribution::*;
