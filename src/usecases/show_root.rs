use std::rc::Rc;

use crate::configs::Config;
use crate::core::ports::UserInteraction;

pub struct ShowRootUseCase {
    ui: Rc<dyn UserInteraction>,
}

impl ShowRootUseCase {
    pub fn new(ui: Rc<dyn UserInteraction>) -> Self {
        Self { ui }
    }

    pub fn execute(&self, config: &Config) {
        self.ui.print(&config.root().display().to_string());
    }
}
