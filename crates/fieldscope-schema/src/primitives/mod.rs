mod any;
mod boolean;
mod enumeration;
mod literal;
mod number;
mod string;

pub use any::ZAny;
pub use boolean::ZBoolean;
pub use enumeration::ZEnum;
pub use literal::ZLiteral;
pub use number::{NumberCheck, ZNumber};
pub use string::{StringCheck, ZString};
