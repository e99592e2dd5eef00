use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("vein `{vein}`: density {density} must be strictly between 0 and 1")]
    VeinDensity { vein: String, density: f64 },

    #[error("invalid density percentage: {0}")]
    DensityPercent(f64),

    #[error("vein `{0}` lists no host rocks")]
    NoRocks(String),

    #[error("vein `{vein}` targets graded ore `{ore}` but declares no grade")]
    MissingGrade { vein: String, ore: String },

    #[error("unknown rock or rock category: {0}")]
    UnknownRock(String),

    #[error("unknown ore: {0}")]
    UnknownOre(String),

    #[error("unknown metal: {0}")]
    UnknownMetal(String),

    #[error("unknown wood: {0}")]
    UnknownWood(String),

    #[error("patch `{0}` sets a custom feature without a custom config")]
    CustomFeatureConfig(String),

    #[error("malformed block state: {0}")]
    MalformedBlockState(String),

    #[error("feature base name `{0}` is assembled more than once")]
    DuplicateFeature(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = GenError> = std::result::Result<T, E>;
