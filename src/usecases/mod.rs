pub mod prepare_gem_repos;
pub mod show_root;
pub mod test_plugin;

pub use prepare_gem_repos::PrepareGemReposUseCase;
pub use show_root::ShowRootUseCase;
pub use test_plugin::{TestCommands, TestPluginState, TestPluginUseCase};
