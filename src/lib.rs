pub mod blocker;
pub mod config;
pub mod credential;
pub mod report;
pub mod types;

pub use blocker::{Blocker, BlockerConfig};
pub use config::AppConfig;
pub use credential::SessionCredentials;
pub use report::BatchSummary;
pub use types::BlockResult;
