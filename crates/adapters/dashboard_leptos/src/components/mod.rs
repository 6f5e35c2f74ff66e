mod controls;
mod light;
mod smart_home;

pub use controls::Controls;
pub use light::Light;
pub use smart_home::SmartHome;
