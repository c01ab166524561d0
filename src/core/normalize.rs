use crate::core::error::EngineError;
use crate::models::{ExerciseFrequency, Factor, HealthObservation, SmokingStatus};

/// Reference band for a continuous attribute
///
/// Values at or below `low` map to 0, values at or above `high` map to 1,
/// with a linear ramp in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceBand {
    pub low: f64,
    pub high: f64,
}

impl ReferenceBand {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn validate(&self, attribute: &'static str) -> Result<(), EngineError> {
        if !self.low.is_finite() || !self.high.is_finite() || self.low >= self.high {
            return Err(EngineError::InvalidBand {
                attribute,
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    /// Map a finite value onto `[0, 1]`
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        ((value - self.low) / (self.high - self.low)).clamp(0.0, 1.0)
    }
}

/// Default value and reference band for one continuous attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousAttribute {
    pub default: f64,
    pub band: ReferenceBand,
}

impl ContinuousAttribute {
    pub const fn new(default: f64, low: f64, high: f64) -> Self {
        Self {
            default,
            band: ReferenceBand::new(low, high),
        }
    }

    /// Substitute the default for missing or non-finite input
    #[inline]
    pub fn resolve(&self, raw: Option<f64>) -> f64 {
        raw.filter(|v| v.is_finite()).unwrap_or(self.default)
    }

    fn validate(&self, attribute: &'static str) -> Result<(), EngineError> {
        self.band.validate(attribute)?;
        if !self.default.is_finite() {
            return Err(EngineError::InvalidDefault {
                attribute,
                value: self.default,
            });
        }
        Ok(())
    }
}

/// Defaults and reference bands for every recognized attribute
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationTable {
    pub bmi: ContinuousAttribute,
    pub systolic_bp: ContinuousAttribute,
    pub cholesterol: ContinuousAttribute,
    pub blood_sugar: ContinuousAttribute,
    pub age: ContinuousAttribute,
    pub diastolic_bp_default: f64,
    pub smoking_default: SmokingStatus,
    pub exercise_default: ExerciseFrequency,
}

impl Default for NormalizationTable {
    fn default() -> Self {
        Self {
            bmi: ContinuousAttribute::new(25.0, 18.5, 30.0),
            systolic_bp: ContinuousAttribute::new(120.0, 90.0, 140.0),
            cholesterol: ContinuousAttribute::new(200.0, 150.0, 250.0),
            blood_sugar: ContinuousAttribute::new(100.0, 70.0, 126.0),
            age: ContinuousAttribute::new(30.0, 30.0, 60.0),
            diastolic_bp_default: 80.0,
            smoking_default: SmokingStatus::Never,
            exercise_default: ExerciseFrequency::Sedentary,
        }
    }
}

impl NormalizationTable {
    pub fn validate(&self) -> Result<(), EngineError> {
        self.bmi.validate("bmi")?;
        self.systolic_bp.validate("systolic_bp")?;
        self.cholesterol.validate("cholesterol")?;
        self.blood_sugar.validate("blood_sugar")?;
        self.age.validate("age")?;
        if !self.diastolic_bp_default.is_finite() {
            return Err(EngineError::InvalidDefault {
                attribute: "diastolic_bp",
                value: self.diastolic_bp_default,
            });
        }
        Ok(())
    }
}

/// Calculate BMI from height (cm) and weight (kg)
///
/// Returns `None` when either measurement is non-positive or non-finite,
/// so callers can fall back to a default instead of propagating noise.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> Option<f64> {
    if !height_cm.is_finite() || !weight_kg.is_finite() || height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);

    bmi.is_finite().then_some(bmi)
}

/// Observation with every default applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedObservation {
    pub bmi: f64,
    pub systolic_bp: f64,
    pub diastolic_bp: f64,
    pub cholesterol: f64,
    pub blood_sugar: f64,
    pub age: f64,
    pub smoking_status: SmokingStatus,
    pub exercise_frequency: ExerciseFrequency,
}

/// Normalized sub-risk values, each in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedFactors {
    pub bmi: f64,
    pub blood_pressure: f64,
    pub cholesterol: f64,
    pub blood_sugar: f64,
    pub age: f64,
    pub smoking: f64,
    pub exercise: f64,
}

impl NormalizedFactors {
    #[inline]
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Bmi => self.bmi,
            Factor::BloodPressure => self.blood_pressure,
            Factor::Cholesterol => self.cholesterol,
            Factor::BloodSugar => self.blood_sugar,
            Factor::Age => self.age,
            Factor::Smoking => self.smoking,
            Factor::Exercise => self.exercise,
        }
    }

    /// Factors that have reached the top of their band
    pub fn at_ceiling(&self) -> Vec<Factor> {
        Factor::ALL
            .into_iter()
            .filter(|factor| self.get(*factor) >= 1.0)
            .collect()
    }
}

/// Converts raw observations into normalized factors
///
/// Total over its input: missing, non-finite or out-of-band values never
/// fail, they are defaulted or clamped.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    table: NormalizationTable,
}

impl Normalizer {
    pub fn new(table: NormalizationTable) -> Result<Self, EngineError> {
        table.validate()?;
        Ok(Self { table })
    }

    pub fn table(&self) -> &NormalizationTable {
        &self.table
    }

    /// Apply defaults to every missing attribute
    ///
    /// An explicit BMI wins, then one derived from height and weight, then
    /// the table default.
    pub fn resolve(&self, obs: &HealthObservation) -> ResolvedObservation {
        let derived_bmi = match (obs.height_cm, obs.weight_kg) {
            (Some(height), Some(weight)) => calculate_bmi(height, weight),
            _ => None,
        };
        let bmi = obs
            .bmi
            .filter(|v| v.is_finite())
            .or(derived_bmi)
            .unwrap_or(self.table.bmi.default);

        ResolvedObservation {
            bmi,
            systolic_bp: self.table.systolic_bp.resolve(obs.systolic_bp.map(f64::from)),
            diastolic_bp: obs
                .diastolic_bp
                .map(f64::from)
                .unwrap_or(self.table.diastolic_bp_default),
            cholesterol: self.table.cholesterol.resolve(obs.cholesterol),
            blood_sugar: self.table.blood_sugar.resolve(obs.blood_sugar),
            age: self.table.age.resolve(obs.age.map(f64::from)),
            smoking_status: obs.smoking_status.unwrap_or(self.table.smoking_default),
            exercise_frequency: obs
                .exercise_frequency
                .unwrap_or(self.table.exercise_default),
        }
    }

    pub fn normalize(&self, obs: &HealthObservation) -> NormalizedFactors {
        self.normalize_resolved(&self.resolve(obs))
    }

    /// Blood pressure is driven by systolic pressure alone
    pub fn normalize_resolved(&self, resolved: &ResolvedObservation) -> NormalizedFactors {
        NormalizedFactors {
            bmi: self.table.bmi.band.normalize(resolved.bmi),
            blood_pressure: self.table.systolic_bp.band.normalize(resolved.systolic_bp),
            cholesterol: self.table.cholesterol.band.normalize(resolved.cholesterol),
            blood_sugar: self.table.blood_sugar.band.normalize(resolved.blood_sugar),
            age: self.table.age.band.normalize(resolved.age),
            smoking: resolved.smoking_status.risk_value(),
            exercise: resolved.exercise_frequency.risk_value(),
        }
    }
}
