pub mod ports;

pub mod core_link;
pub use core_link::CoreLink;

pub mod environment;
pub use environment::ProcessEnvironment;

pub mod gem_overrides;
pub use gem_overrides::GemOverrides;

pub mod repo_spec;
pub use repo_spec::RepoSpec;

pub mod repository;
pub use repository::{GitCheckoutAcquirer, Repository};
