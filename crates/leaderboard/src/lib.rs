pub mod commands;
mod log;
#[cfg(test)]
mod test_utils;
pub mod ux;
