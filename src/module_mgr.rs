#![doc(hidden)]

use teloxide::prelude::*;
use teloxide::types::BotCommand;

use crate::types::TeloxideHandler;

pub(crate) trait Module {
    fn register_dependency(&mut self, _dep_map: &mut DependencyMap) {}

    fn handler_chain(&self) -> TeloxideHandler;

    fn commands(&self) -> Vec<BotCommand> {
        vec![]
    }
}

pub(crate) struct ModuleManager {
    modules: Vec<Box<dyn Module + Send + 'static>>,
}

impl ModuleManager {
    pub(crate) fn new() -> Self {
        Self { modules: vec![] }
    }

    pub(crate) fn register_module<M>(&mut self, module: M)
    where
        M: Module + Send + 'static,
    {
        self.modules.push(Box::new(module));
    }

    pub(crate) fn with_all_modules<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut dyn Module),
    {
        for module in self.modules.iter_mut() {
            f(module.as_mut());
        }
    }
}
