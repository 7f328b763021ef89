pub mod generation_request;
pub mod input_model;
