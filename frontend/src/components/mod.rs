pub mod nav_link;
pub mod page_background;

pub use nav_link::NavLink;
pub use page_background::PageBackground;
