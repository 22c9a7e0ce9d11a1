mod default_val;
mod nullable;
mod optional;

pub use default_val::{DefaultValue, ZDefault};
pub use nullable::ZNullable;
pub use optional::ZOptional;
