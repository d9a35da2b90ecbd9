pub mod analysis;
pub mod error;
pub mod execution;
pub mod test_case;
