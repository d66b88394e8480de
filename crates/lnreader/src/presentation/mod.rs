pub mod browse;
pub mod settings;
pub mod toast;
pub mod widgets;
