mod bell;

pub use bell::BellIcon;
