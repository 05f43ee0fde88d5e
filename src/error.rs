use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid frame size: width={width}, height={height}")]
    InvalidFrame { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("geometry underflow: inset produced width={width}, height={height}")]
    GeometryUnderflow { width: f64, height: f64 },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("renderer backend `{0}` is not supported by this build")]
    BackendUnsupported(&'static str),

    #[error("export failed: {0}")]
    Export(String),
}
