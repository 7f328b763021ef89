#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowStatus {
    Idle,
    GeneratingImage,
    GeneratingRecipe,
    Error(String),
    Ready,
}

impl WorkflowStatus {
    pub fn value(&self) -> &str {
        match *self {
            Self::Idle => "idle",
            Self::GeneratingImage => "generating_image",
            Self::GeneratingRecipe => "generating_recipe",
            Self::Error(_) => "error",
            Self::Ready => "ready",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::GeneratingImage | Self::GeneratingRecipe)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
