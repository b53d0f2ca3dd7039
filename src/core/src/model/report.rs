use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    pub samples: usize,
    /// Fraction of rows whose rounded prediction equals the rating
    pub exact_accuracy: f64,
    /// Fraction of rows whose rounded prediction is at most one category off
    pub within_one_accuracy: f64,
    /// Mean of the stored per-feedback errors
    pub mean_error: f64,
    pub top_predictors: Vec<Predictor>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Predictor {
    pub name: &'static str,
    pub coefficient: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictorDirection {
    Easier,
    Harder,
}

impl Predictor {
    pub fn direction(&self) -> PredictorDirection {
        if self.coefficient > 0.0 {
            PredictorDirection::Easier
        } else {
            PredictorDirection::Harder
        }
    }
}

impl Display for PredictorDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PredictorDirection::Easier => write!(f, "easier"),
            PredictorDirection::Harder => write!(f, "harder"),
        }
    }
}

impl Display for Predictor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.direction())
    }
}
