pub mod cooking_style;
