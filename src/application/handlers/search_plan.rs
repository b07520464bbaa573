//! SearchPlanHandler - Filters the active document's sections by text.

use crate::application::{DocumentRegistry, ViewerError};
use crate::domain::dashboard::{search, SearchHit};

#[derive(Debug, Clone)]
pub struct SearchPlanQuery {
    pub text: String,
}

pub struct SearchPlanHandler {
    registry: DocumentRegistry,
}

impl SearchPlanHandler {
    pub fn new(registry: DocumentRegistry) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, query: SearchPlanQuery) -> Result<Vec<SearchHit>, ViewerError> {
        let active = self.registry.require_active().await?;
        Ok(search(&active.view, &query.text))
    }
}
