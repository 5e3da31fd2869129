pub mod bitwise;
