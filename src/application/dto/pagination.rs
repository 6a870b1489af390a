use serde::Serialize;

/// One numbered page of a collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, per_page: u32, has_more: bool) -> Self {
        Self {
            items,
            page,
            per_page,
            has_more,
        }
    }
}
