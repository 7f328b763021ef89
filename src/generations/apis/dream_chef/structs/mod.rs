pub mod generate_creation_response;
pub mod generate_image_response;
pub mod generate_recipe_response;
