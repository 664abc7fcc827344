use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid series index: {index} (series count is {count})")]
    InvalidSeriesIndex { index: usize, count: usize },

    #[error("graph is closed; open a series first")]
    GraphClosed,

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}
