mod shell;
mod sidebar;
mod stat_card;
mod theme_selector;
mod toast;
mod topbar;

pub use shell::Shell;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use theme_selector::ThemeSelector;
pub use toast::{ToastContainer, use_toasts};
pub use topbar::Topbar;
