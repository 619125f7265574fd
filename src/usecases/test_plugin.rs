use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use log::info;

use crate::core::ports::{FileSystem, ProcessRunner, RepositoryAcquirer, UserInteraction};
use crate::core::{CoreLink, ProcessEnvironment, Repository};
use crate::errors::{CommandError, CrossRepoError};
use crate::usecases::PrepareGemReposUseCase;

/// Progress of a plugin test run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestPluginState {
    Init,
    ReposEnsured,
    AuxPrepared,
    Linked,
    SetupRun,
    TestsRun,
    Failed,
}

impl TestPluginState {
    pub fn is_terminal(self) -> bool {
        matches!(self, TestPluginState::TestsRun | TestPluginState::Failed)
    }
}

impl fmt::Display for TestPluginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TestPluginState::Init => "init",
            TestPluginState::ReposEnsured => "repositories ensured",
            TestPluginState::AuxPrepared => "gem repositories prepared",
            TestPluginState::Linked => "core linked",
            TestPluginState::SetupRun => "setup run",
            TestPluginState::TestsRun => "tests run",
            TestPluginState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// What to run once the plugin checkout is wired up
#[derive(Debug, Clone)]
pub struct TestCommands {
    pub setup: String,
    pub test: String,
    pub env: ProcessEnvironment,
}

/// Runs a plugin's test suite against local core and gem checkouts
pub struct TestPluginUseCase {
    acquirer: Rc<dyn RepositoryAcquirer>,
    fs: Rc<dyn FileSystem>,
    runner: Rc<dyn ProcessRunner>,
    ui: Rc<dyn UserInteraction>,
    state: Cell<TestPluginState>,
}

impl TestPluginUseCase {
    pub fn new(
        acquirer: Rc<dyn RepositoryAcquirer>,
        fs: Rc<dyn FileSystem>,
        runner: Rc<dyn ProcessRunner>,
        ui: Rc<dyn UserInteraction>,
    ) -> Self {
        Self {
            acquirer,
            fs,
            runner,
            ui,
            state: Cell::new(TestPluginState::Init),
        }
    }

    pub fn state(&self) -> TestPluginState {
        self.state.get()
    }

    /// Walk the run from `Init` to `TestsRun`
    ///
    /// The first error moves the run to `Failed` and is returned unchanged;
    /// nothing after it is attempted.
    pub fn execute(
        &self,
        plugin: &Repository,
        core: &Repository,
        gem_repos: &[Repository],
        commands: &TestCommands,
    ) -> Result<(), CrossRepoError> {
        self.state.set(TestPluginState::Init);

        match self.run(plugin, core, gem_repos, commands) {
            Ok(()) => {
                self.ui
                    .print(&format!("Tests passed for {}", plugin.spec()));
                Ok(())
            }
            Err(e) => {
                info!("Run for {} failed after stage: {}", plugin.spec(), self.state());
                self.state.set(TestPluginState::Failed);
                Err(e)
            }
        }
    }

    fn run(
        &self,
        plugin: &Repository,
        core: &Repository,
        gem_repos: &[Repository],
        commands: &TestCommands,
    ) -> Result<(), CrossRepoError> {
        self.acquirer.ensure(plugin)?;
        self.acquirer.ensure(core)?;
        self.advance(TestPluginState::ReposEnsured);

        PrepareGemReposUseCase::new(Rc::clone(&self.acquirer), Rc::clone(&self.fs))
            .execute(gem_repos, plugin)?;
        self.advance(TestPluginState::AuxPrepared);

        CoreLink::new(plugin.path(), core.path()).create(self.fs.as_ref())?;
        self.advance(TestPluginState::Linked);

        self.run_command(&commands.setup, plugin, &commands.env)?;
        self.advance(TestPluginState::SetupRun);

        self.run_command(&commands.test, plugin, &commands.env)?;
        self.advance(TestPluginState::TestsRun);

        Ok(())
    }

    fn advance(&self, next: TestPluginState) {
        info!("{} -> {}", self.state(), next);
        self.state.set(next);
    }

    fn run_command(
        &self,
        command: &str,
        plugin: &Repository,
        env: &ProcessEnvironment,
    ) -> Result<(), CommandError> {
        info!("Running `{command}` in {}", plugin.path().display());

        let outcome = self
            .runner
            .run(command, plugin.path(), env)
            .map_err(|source| CommandError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if !outcome.success() {
            return Err(CommandError::Failed {
                command: command.to_string(),
                code: outcome.code,
            });
        }

        Ok(())
    }
}
