pub mod generation_mode;
pub mod workflow_status;
