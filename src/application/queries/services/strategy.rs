use super::{ServiceQueryService, service::parse_id};
use crate::application::{dto::StrategyAnalysisDto, error::ApplicationResult};
use crate::domain::service::analyze;

pub struct AnalyzeStrategyQuery {
    pub service_id: String,
}

impl ServiceQueryService {
    pub fn analyze_strategy(
        &self,
        query: AnalyzeStrategyQuery,
    ) -> ApplicationResult<StrategyAnalysisDto> {
        let id = parse_id(&query.service_id)?;
        let analysis = analyze(&id, &self.corpus, self.catalog.as_ref())?;
        tracing::debug!(
            service_id = %id,
            gaps = analysis.content_gaps.len(),
            matched = analysis.matched_content,
            "strategy analysis computed"
        );
        Ok(analysis.into())
    }
}
