pub(crate) mod config;
pub(crate) mod input;
pub(crate) mod palette;
pub(crate) mod spotlight;
