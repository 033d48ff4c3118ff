/// In-page navigation links, one per catalog item

use crate::catalog::Item;

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub target_id: String,
    pub href: String,
    pub title: String,
}

pub fn nav_links(items: &[Item]) -> Vec<NavLink> {
    items
        .iter()
        .map(|item| NavLink {
            target_id: item.id.clone(),
            href: format!("#{}", item.id),
            title: item.title.clone(),
        })
        .collect()
}
