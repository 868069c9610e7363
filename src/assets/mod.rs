pub(crate) mod blob;
pub(crate) mod file;
pub(crate) mod manager;
