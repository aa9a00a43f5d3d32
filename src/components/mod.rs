// Component-based architecture for the phone TUI

pub mod component;

pub mod app_overlay;
pub mod control_center;
pub mod footer;
pub mod help_overlay;
pub mod home_screen;
pub mod lock_screen;
pub mod phone_frame;

pub use app_overlay::AppOverlay;
pub use component::{Component, ComponentAction, PhoneView};
pub use control_center::ControlCenter;
pub use footer::Footer;
pub use help_overlay::HelpOverlay;
pub use home_screen::HomeScreen;
pub use lock_screen::LockScreen;
pub use phone_frame::{PhoneFrame, StatusBar};
