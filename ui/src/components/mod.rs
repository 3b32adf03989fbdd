pub mod desktop_nav;
pub mod menu_items;
pub mod menu_toggle;
pub mod mobile_menu;

pub use desktop_nav::DesktopNav;
pub use mobile_menu::MobileMenu;
