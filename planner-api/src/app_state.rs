use crate::domain::AnalysisProvider;

#[derive(Clone)]
pub struct AppState {
    pub analysis: AnalysisProvider,
}

impl AppState {
    pub fn new(analysis: AnalysisProvider) -> Self {
        Self { analysis }
    }
}
