pub mod image_artifact;
pub mod recipe_artifact;
pub mod request_failure;
pub mod workflow;
pub mod workflow_snapshot;
