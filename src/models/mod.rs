pub mod analysis;
pub mod enhanced;
pub mod sales;

pub use analysis::*;
pub use enhanced::*;
pub use sales::*;
