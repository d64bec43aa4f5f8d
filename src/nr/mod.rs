pub mod shims;
