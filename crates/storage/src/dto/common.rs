use serde::Serialize;
use utoipa::ToSchema;

pub(crate) fn default_page() -> u32 {
    1
}

pub(crate) fn default_page_size() -> u32 {
    50
}

/// Clamp-free pagination check shared by the list filters: returns
/// (limit, offset) or a message describing the bad parameter.
pub fn bounded_pagination(page: u32, page_size: u32) -> Result<(u32, u32), String> {
    if page < 1 {
        return Err("page must be >= 1".to_string());
    }
    if page_size < 1 || page_size > 100 {
        return Err("page_size must be between 1 and 100".to_string());
    }
    Ok((page_size, (page - 1) * page_size))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(page: u32, page_size: u32, total_items: i64) -> Self {
        let total_pages = ((total_items as f64) / (page_size as f64)).ceil() as u32;
        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u32, page_size: u32, total_items: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(page, page_size, total_items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_zero_offset() {
        assert_eq!(bounded_pagination(1, 25), Ok((25, 0)));
        assert_eq!(bounded_pagination(3, 10), Ok((10, 20)));
    }

    #[test]
    fn page_size_is_bounded() {
        assert!(bounded_pagination(1, 0).is_err());
        assert!(bounded_pagination(1, 101).is_err());
        assert!(bounded_pagination(0, 10).is_err());
    }

    #[test]
    fn total_pages_rounds_up() {
        let meta = PaginationMeta::new(1, 10, 11);
        assert_eq!(meta.total_pages, 2);
    }
}
