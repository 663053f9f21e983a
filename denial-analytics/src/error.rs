use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
