/// Switches for the lookup behavior
pub mod lookup_options;
