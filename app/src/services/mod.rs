pub mod hire;
