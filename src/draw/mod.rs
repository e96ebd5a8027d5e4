pub(crate) mod list;
pub(crate) mod measure;
pub(crate) mod paint;
pub(crate) mod text;
