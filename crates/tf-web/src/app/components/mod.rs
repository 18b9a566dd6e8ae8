pub mod avatar_dropdown;
pub mod icons;
pub mod layout;
pub mod navbar;

pub use avatar_dropdown::AvatarDropDown;
pub use icons::BellIcon;
pub use layout::Layout;
pub use navbar::{ui_spawner, NavBar, NavbarHandle};
