use thiserror::Error;

/// Top-level error type for section reconstruction.
#[derive(Debug, Error)]
pub enum FoilError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Numerical(#[from] NumericalError),
}

/// Failure class of a [`FoilError`], for drivers deciding whether to skip,
/// abort or retry a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The raw input cannot form a closed ring or is otherwise malformed.
    InputMalformed,
    /// Duplicate, collinear or otherwise degenerate points.
    DegenerateGeometry,
    /// The shape is not a supported airfoil topology.
    TopologyUnsupported,
    /// An iterative solver did not converge.
    NonConvergence,
}

impl FoilError {
    /// Returns the failure class of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Input(_) => ErrorKind::InputMalformed,
            Self::Geometry(_) => ErrorKind::DegenerateGeometry,
            Self::Topology(_) => ErrorKind::TopologyUnsupported,
            Self::Numerical(_) => ErrorKind::NonConvergence,
        }
    }
}

/// Errors caused by malformed input data or configuration.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("chain not found: no segment continues the ring at ({x}, {y})")]
    ChainNotFound { x: f64, y: f64 },

    #[error("degenerate chain: {0}")]
    DegenerateChain(String),

    #[error("length mismatch: {points} points but {arclength} arclength values")]
    LengthMismatch { points: usize, arclength: usize },

    #[error("pressure mismatch: {points} points but {pressure} pressure values")]
    PressureMismatch { points: usize, pressure: usize },

    #[error("segment {segment} carries no pressure")]
    MissingPressure { segment: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    #[error("slicer failed at station {station}: {message}")]
    Slicer { station: usize, message: String },
}

/// Errors caused by degenerate geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("duplicate points: ({0}, {1}), ({2}, {3}), ({4}, {5})")]
    DuplicatePoints(f64, f64, f64, f64, f64, f64),

    #[error("collinear points: ({0}, {1}), ({2}, {3}), ({4}, {5})")]
    CollinearPoints(f64, f64, f64, f64, f64, f64),

    #[error("zero-length edge at loop index {0}")]
    ZeroLengthEdge(usize),

    #[error("{surface} surface is not strictly increasing in x at sample {index}")]
    NotMonotonic { surface: &'static str, index: usize },

    #[error("invalid interpolant: {0}")]
    InvalidInterpolant(String),

    #[error("x = {x} is outside the interpolation domain [{min}, {max}]")]
    OutOfDomain { x: f64, min: f64, max: f64 },

    #[error("maximum thickness {0} is not positive")]
    NonPositiveThickness(f64),
}

/// Errors caused by a section shape the reconstruction does not support.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("no blunt trailing edge found ({candidates} candidate vertices)")]
    NoBluntTrailingEdge { candidates: usize },

    #[error("unsupported topology: {0}")]
    Unsupported(String),

    #[error("leading edge seed at loop index {index} has no neighbour on both sides")]
    LeadingEdgeOnBoundary { index: usize },

    #[error("{0} surface has fewer than 2 points")]
    EmptySurface(&'static str),
}

/// Errors caused by numerical solvers.
#[derive(Debug, Error)]
pub enum NumericalError {
    #[error("leading edge localization failed after {iterations} iterations")]
    LeadingEdgeNotConverged { iterations: usize },
}

/// Convenience type alias for results using [`FoilError`].
pub type Result<T> = std::result::Result<T, FoilError>;
