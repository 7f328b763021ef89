pub const GENERATE_IMAGE_PATH: &str = "/api/generate-image";
pub const GENERATE_RECIPE_PATH: &str = "/api/generate-recipe";
pub const GENERATE_CREATION_PATH: &str = "/api/generate-creation";

pub const ERROR_FIELD: &str = "error";
/// The recipe endpoint reports failures in `instructions`.
pub const RECIPE_ERROR_FIELD: &str = "instructions";
