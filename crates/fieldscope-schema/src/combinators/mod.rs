mod describe;
mod discriminated_union;
mod pipe;
mod refine;
mod transform;
mod union;

pub use describe::ZDescribe;
pub use discriminated_union::{discriminator_literal, ZDiscriminatedUnion};
pub use pipe::ZPipe;
pub use refine::ZRefine;
pub use transform::ZTransform;
pub use union::ZUnion;
