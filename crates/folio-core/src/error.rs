use thiserror::Error;

/// Configuration errors raised when an effect or collaborator is built with
/// values outside the range it can animate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FolioError {
    #[error("lerp factor must be inside (0, 1), got {0}")]
    LerpFactor(f32),
    #[error("fps cap must be positive and finite, got {0}")]
    FpsCap(f64),
    #[error("typewriter needs at least one non-empty phrase")]
    NoPhrases,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}` (expected `light` or `dark`)")]
pub struct ParseThemeError(pub String);
