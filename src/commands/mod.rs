pub type CmdResult<T> = raygun_deployment::Result<(T, i32)>;

pub mod report;
pub mod resolve;
