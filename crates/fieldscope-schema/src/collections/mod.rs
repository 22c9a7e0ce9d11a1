mod array;

pub use array::{ArrayCheck, ZArray};
