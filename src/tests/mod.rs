pub mod test_debug;
pub mod test_unit;
