mod array;
mod raw_buf;

pub use array::GrowArr;
