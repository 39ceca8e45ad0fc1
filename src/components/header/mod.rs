//! Site header and scroll tracking.

mod component;
pub mod scroll_spy;

pub use component::Header;

/// A navigable page section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
	/// Element id of the section, also used as the link fragment.
	pub id: &'static str,
	/// Text of the navigation link.
	pub label: &'static str,
}

/// Sections in page order.
pub const NAV_ITEMS: [NavItem; 6] = [
	NavItem { id: "home", label: "Home" },
	NavItem { id: "about", label: "About" },
	NavItem { id: "skills", label: "Skills" },
	NavItem { id: "services", label: "Services" },
	NavItem { id: "project", label: "Projects" },
	NavItem { id: "contact", label: "Contact" },
];
