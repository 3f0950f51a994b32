// src/ui/layout/mod.rs - Dashboard chrome

mod header;
mod sidebar;

pub use header::Header;
pub use sidebar::{navigation_items, plan_blurb, NavItem, Sidebar};
