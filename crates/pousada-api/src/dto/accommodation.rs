//! Accommodation query parameters

use serde::Deserialize;
use uuid::Uuid;

use pousada_shared::constants::DEFAULT_PAGE_SIZE;
use pousada_shared::Pagination;

/// `?property=<uuid>&page=<n>&page_size=<n>`
#[derive(Debug, Default, Deserialize)]
pub struct AccommodationListQuery {
    pub property: Option<Uuid>,
    pub page: Option<u32>,
    #[serde(alias = "per_page")]
    pub page_size: Option<u32>,
}

impl AccommodationListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page.unwrap_or(1),
            per_page: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}
