pub mod aliases;
pub mod shim;
