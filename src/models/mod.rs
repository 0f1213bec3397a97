pub mod category;
pub mod deadline;
pub mod email;
pub mod predicate;
pub mod priority;
pub mod task;
pub mod text;

pub use category::*;
pub use deadline::*;
pub use email::*;
pub use predicate::*;
pub use priority::*;
pub use task::*;
pub use text::*;
