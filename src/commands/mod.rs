//! CLI command implementations

mod dashboard;
mod results;
mod run;
#[cfg(feature = "ui")]
mod serve;

pub use dashboard::dashboard;
pub use results::{results_list, results_show};
pub use run::run_check;
#[cfg(feature = "ui")]
pub use serve::serve;
