mod color_palette;
mod dashboard;
mod devices;
mod login;
mod not_found;
mod settings;

pub use color_palette::ColorPalette;
pub use dashboard::Dashboard;
pub use devices::Devices;
pub use login::Login;
pub use not_found::NotFound;
pub use settings::Settings;
