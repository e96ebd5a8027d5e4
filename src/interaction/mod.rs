pub(crate) mod light_mode;
