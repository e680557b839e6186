use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AnalyzeCropInput {
    /// Data-URL-encoded image as captured by the client.
    pub image_data_url: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct GetAnalysisHistoryInput {
    pub user_id: Uuid,
    pub filter: GetAnalysesFilter,
}

#[derive(Debug, Clone, Default)]
pub struct GetAnalysesFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct GetAnalysisInput {
    pub analysis_id: Uuid,
}

/// A single scored label from a classifier call.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}
