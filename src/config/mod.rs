pub(crate) mod scene_config;
pub(crate) mod theme;
