use crate::difficulty::{MAX_DIFFICULTY, MIN_DIFFICULTY, round_score};
use crate::feedback::FeedbackHistory;
use crate::model::report::{Predictor, TrainingReport};
use crate::player::{FEATURE_COUNT, FEATURE_NAMES, FeatureExtractor, FeatureVector, PlayerRecord};
use itertools::Itertools;
use nalgebra::{DMatrix, DVector};
use thiserror::Error;

/// Singular values below this fraction of the largest one are treated as zero.
/// The one-hot draft and position columns are collinear with the intercept,
/// so the solve must tolerate rank deficiency.
const RELATIVE_RCOND: f64 = 1e-10;

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("no feedback to train on")]
    NoSamples,
    #[error("{rows} feature rows but {labels} labels")]
    LabelMismatch { rows: usize, labels: usize },
    #[error("least squares solve failed: {0}")]
    Solver(String),
}

/// Ordinary least squares over the feature vector, with intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    coefficients: FeatureVector,
    intercept: f64,
    trained_on: usize,
}

impl LinearModel {
    pub fn new(coefficients: FeatureVector, intercept: f64, trained_on: usize) -> Self {
        LinearModel {
            coefficients,
            intercept,
            trained_on,
        }
    }

    /// Full refit over every record in the history.
    pub fn fit(history: &FeedbackHistory) -> Result<LinearModel, TrainingError> {
        let (rows, labels) = history.training_rows();

        Self::fit_rows(&rows, &labels)
    }

    /// Centres features and labels, solves the centred system for the minimum-norm
    /// least squares solution, then recovers the intercept from the means.
    pub fn fit_rows(rows: &[FeatureVector], labels: &[f64]) -> Result<LinearModel, TrainingError> {
        if rows.len() != labels.len() {
            return Err(TrainingError::LabelMismatch {
                rows: rows.len(),
                labels: labels.len(),
            });
        }

        let samples = rows.len();
        if samples == 0 {
            return Err(TrainingError::NoSamples);
        }

        let feature_means: Vec<f64> = (0..FEATURE_COUNT)
            .map(|col| rows.iter().map(|row| row[col]).sum::<f64>() / samples as f64)
            .collect();
        let label_mean = labels.iter().sum::<f64>() / samples as f64;

        let centered = DMatrix::from_fn(samples, FEATURE_COUNT, |row, col| {
            rows[row][col] - feature_means[col]
        });
        let targets = DVector::from_fn(samples, |row, _| labels[row] - label_mean);

        let svd = centered.svd(true, true);
        let largest = svd.singular_values.max();
        let eps = (largest * RELATIVE_RCOND).max(f64::EPSILON);

        let solution = svd
            .solve(&targets, eps)
            .map_err(|e| TrainingError::Solver(e.to_string()))?;

        let mut coefficients = [0.0; FEATURE_COUNT];
        for (idx, coefficient) in coefficients.iter_mut().enumerate() {
            *coefficient = solution[idx];
        }

        let intercept = label_mean
            - coefficients
                .iter()
                .zip(&feature_means)
                .map(|(coefficient, mean)| coefficient * mean)
                .sum::<f64>();

        Ok(LinearModel::new(coefficients, intercept, samples))
    }

    pub fn predict(&self, features: &FeatureVector) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(coefficient, value)| coefficient * value)
                .sum::<f64>()
    }

    /// Prediction clamped into the 1..=4 range and rounded to a whole category.
    pub fn score(&self, player: &PlayerRecord) -> f64 {
        let predicted = self.predict(&FeatureExtractor::extract(player));

        round_score(predicted.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY))
    }

    /// In-sample diagnostics. They are reported, never used to reject a fit.
    pub fn evaluate(&self, history: &FeedbackHistory, top_k: usize) -> TrainingReport {
        let samples = history.len();

        let (exact, within_one) = history.iter().fold((0usize, 0usize), |(exact, within), record| {
            let rounded = round_score(self.predict(&record.features));
            let distance = (rounded - record.label()).abs();

            (
                exact + usize::from(distance == 0.0),
                within + usize::from(distance <= 1.0),
            )
        });

        let fraction = |count: usize| {
            if samples == 0 { 0.0 } else { count as f64 / samples as f64 }
        };

        TrainingReport {
            samples,
            exact_accuracy: fraction(exact),
            within_one_accuracy: fraction(within_one),
            mean_error: history.mean_error().unwrap_or_default(),
            top_predictors: self.top_predictors(top_k),
        }
    }

    /// Features with the largest absolute coefficients, ties kept in column order.
    pub fn top_predictors(&self, count: usize) -> Vec<Predictor> {
        FEATURE_NAMES
            .iter()
            .zip(self.coefficients)
            .sorted_by(|a, b| b.1.abs().total_cmp(&a.1.abs()))
            .take(count)
            .map(|(&name, coefficient)| Predictor { name, coefficient })
            .collect()
    }

    pub fn coefficients(&self) -> &FeatureVector {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn trained_on(&self) -> usize {
        self.trained_on
    }
}
