mod common;

pub use common::{Idea, IdeaTier};
