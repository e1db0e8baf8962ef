use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u32,
}

impl Pagination {
    pub fn new(current_page: u32, items_per_page: u32, total_items: u64) -> Self {
        let per_page = items_per_page.max(1) as u64;
        Self {
            current_page,
            total_pages: total_items.div_ceil(per_page),
            total_items,
            items_per_page,
        }
    }
}
