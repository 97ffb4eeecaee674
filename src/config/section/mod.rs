//! Configuration section definitions.
//!
//! Each module corresponds to a top-level key of the config document:
//!
//! | Module    | Key             | Purpose                              |
//! |-----------|-----------------|--------------------------------------|
//! | `base`    | `basePath`      | URL prefix for routes and assets     |
//! | `nav`     | `navItems`      | Navigation bar links                 |
//! | `sidebar` | `sidebarGroups` | Side panel groups and links          |
//! | `social`  | `socialLinks`   | Social-link icons                    |
//! | `link`    | -               | Link rules shared by the above       |

mod base;
pub mod link;
mod nav;
mod sidebar;
mod social;

pub use base::BasePath;
pub use link::LinkKind;
pub use nav::NavItem;
pub use sidebar::{SidebarGroup, SidebarItem};
pub use social::{SocialIcon, SocialLink};

pub(crate) use nav::nav_from_raw;
pub(crate) use sidebar::sidebar_from_raw;
pub(crate) use social::social_from_raw;
