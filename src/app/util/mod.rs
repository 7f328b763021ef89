pub mod file_name;
pub mod reqwest;
#[cfg(test)]
pub mod test_utils;
