// Directory tree model and filesystem scanner

pub mod builder;
pub mod node;

pub use builder::*;
pub use node::*;
