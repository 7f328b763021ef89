use crate::{
    generations::{enums::generation_mode::GenerationMode, models::workflow::Workflow},
    inputs::models::input_model::InputModel,
    pages::models::unload_guard::UnloadGuard,
};

/// Everything the page is rendered from. Lives behind one lock so each
/// user action or call resolution is applied as a single update.
#[derive(Debug)]
pub struct Session {
    pub inputs: InputModel,
    pub workflow: Workflow,
    pub unload_guard: UnloadGuard,
}

impl Session {
    pub fn new(mode: GenerationMode) -> Self {
        let mut unload_guard = UnloadGuard::new();
        unload_guard.attach();

        return Self {
            inputs: InputModel::new(),
            workflow: Workflow::new(mode),
            unload_guard,
        };
    }
}
