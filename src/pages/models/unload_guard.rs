use crate::generations::models::workflow::Workflow;

/// Decides whether leaving the page should ask the browser for a
/// confirmation. Inert until attached and after detach.
#[derive(Debug, Default)]
pub struct UnloadGuard {
    attached: bool,
}

impl UnloadGuard {
    pub fn new() -> Self {
        Self { attached: false }
    }

    pub fn attach(&mut self) {
        if !self.attached {
            tracing::debug!("unload guard attached");
        }
        self.attached = true;
    }

    pub fn detach(&mut self) {
        if self.attached {
            tracing::debug!("unload guard detached");
        }
        self.attached = false;
    }

    pub fn intercepts(&self, workflow: &Workflow) -> bool {
        self.attached && workflow.has_artifacts()
    }
}
