mod build;
mod check;
mod plan;

pub use build::cmd_build;
pub use check::cmd_check;
pub use plan::cmd_plan;
