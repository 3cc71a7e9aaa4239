//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module  | TOML Section | Purpose                                  |
//! |---------|--------------|------------------------------------------|
//! | `site`  | `[site]`     | Title, description, base path, sources   |
//! | `theme` | `[theme]`    | Navigation bar, sidebar, social links    |
//! | `build` | `[build]`    | Bundler passthrough options (optional)   |

pub mod build;
pub mod site;
pub mod theme;

pub use build::{BuildSectionConfig, MinifyStrategy};
pub use site::SiteInfoConfig;
pub use theme::{NavItem, SidebarSection, SocialLink, ThemeSectionConfig};
