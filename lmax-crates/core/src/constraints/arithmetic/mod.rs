mod equality;
mod inequality;
mod maximum;

pub use equality::*;
pub use inequality::*;
pub use maximum::*;
