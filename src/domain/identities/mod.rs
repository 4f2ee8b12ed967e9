pub mod machine_name;

pub use machine_name::{MACHINE_NAME_MAX_LENGTH, MachineName};
