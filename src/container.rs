use std::rc::Rc;

use crate::adapters::{GitCli, SystemProcessRunner, TerminalInteraction, UnixFs};
use crate::core::GitCheckoutAcquirer;
use crate::core::ports::{FileSystem, GitRepository, ProcessRunner, RepositoryAcquirer, UserInteraction};

pub struct AppContainer {
    pub fs: Rc<dyn FileSystem>,
    pub acquirer: Rc<dyn RepositoryAcquirer>,
    pub runner: Rc<dyn ProcessRunner>,
    pub ui: Rc<dyn UserInteraction>,
}

impl AppContainer {
    pub fn new() -> Self {
        let git: Rc<dyn GitRepository> = Rc::new(GitCli::new());
        let fs: Rc<dyn FileSystem> = Rc::new(UnixFs::new());

        Self {
            acquirer: Rc::new(GitCheckoutAcquirer::new(git, Rc::clone(&fs))),
            fs,
            runner: Rc::new(SystemProcessRunner::new()),
            ui: Rc::new(TerminalInteraction::new()),
        }
    }
}
