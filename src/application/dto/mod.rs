pub mod content;
pub mod pagination;
pub mod services;

pub use content::{ContentDetailDto, ContentPageDto, ContentSummaryDto, FacetsDto};
pub use pagination::PaginationDto;
pub use services::{
    PriceRangeDto, ServiceCategoryDto, ServiceDto, ServiceRefDto, StrategyAnalysisDto,
};
