// Application configuration: user settings from <data_dir>/config.json and the colour palette.
pub mod settings;
pub mod theme;
