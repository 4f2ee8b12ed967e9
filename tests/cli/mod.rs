mod create;
mod libraries;
mod list;
mod machine_name;
