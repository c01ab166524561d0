// Unit tests for the health risk engine

use health_risk::core::{
    ConstantScorer, Normalizer, RecommendationCatalog, RiskAggregator, RiskEngine,
    normalize::NormalizationTable,
};
use health_risk::models::{ExerciseFrequency, HealthObservation, RiskCategory, SmokingStatus};
use std::sync::Arc;

fn in_unit_range(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fn sample_observations() -> Vec<HealthObservation> {
    vec![
        HealthObservation::default(),
        HealthObservation {
            bmi: Some(17.0),
            systolic_bp: Some(85),
            cholesterol: Some(120.0),
            blood_sugar: Some(60.0),
            age: Some(20),
            smoking_status: Some(SmokingStatus::Never),
            exercise_frequency: Some(ExerciseFrequency::VeryActive),
            ..Default::default()
        },
        HealthObservation {
            bmi: Some(60.0),
            systolic_bp: Some(250),
            diastolic_bp: Some(150),
            cholesterol: Some(900.0),
            blood_sugar: Some(450.0),
            age: Some(120),
            smoking_status: Some(SmokingStatus::Current),
            exercise_frequency: Some(ExerciseFrequency::Sedentary),
            ..Default::default()
        },
        HealthObservation {
            height_cm: Some(165.0),
            weight_kg: Some(72.0),
            age: Some(47),
            smoking_status: Some(SmokingStatus::Former),
            exercise_frequency: Some(ExerciseFrequency::Occasional),
            ..Default::default()
        },
        HealthObservation {
            bmi: Some(-4.0),
            systolic_bp: Some(-20),
            age: Some(-3),
            ..Default::default()
        },
    ]
}

#[test]
fn test_scores_within_unit_range() {
    let engine = RiskEngine::with_defaults();

    for obs in sample_observations() {
        let profile = engine.assess(&obs);

        assert!(in_unit_range(profile.overall_risk_score), "{:?}", obs);
        for category in RiskCategory::ALL {
            assert!(
                in_unit_range(profile.category_score(category)),
                "{} out of range for {:?}",
                category,
                obs
            );
        }
    }
}

#[test]
fn test_overall_is_mean_of_categories() {
    let engine = RiskEngine::with_defaults();

    for obs in sample_observations() {
        let profile = engine.assess(&obs);
        let mean = RiskCategory::ALL
            .iter()
            .map(|c| profile.category_score(*c))
            .sum::<f64>()
            / 5.0;

        assert!((profile.overall_risk_score - mean).abs() < 1e-12);
    }
}

#[test]
fn test_cholesterol_is_monotonic() {
    let engine = RiskEngine::with_defaults();
    let normalizer = Normalizer::default();

    let mut previous_factor = f64::MIN;
    let mut previous_score = f64::MIN;
    for cholesterol in (100..=300).step_by(5) {
        let obs = HealthObservation {
            cholesterol: Some(cholesterol as f64),
            ..Default::default()
        };
        let factor = normalizer.normalize(&obs).cholesterol;
        let score = engine.assess(&obs).cardiovascular_risk;

        assert!(factor >= previous_factor, "factor fell at {}", cholesterol);
        assert!(score >= previous_score, "score fell at {}", cholesterol);
        previous_factor = factor;
        previous_score = score;
    }
}

#[test]
fn test_continuous_attributes_are_monotonic() {
    let engine = RiskEngine::with_defaults();

    let mut previous = (f64::MIN, f64::MIN, f64::MIN, f64::MIN);
    for step in 0..=40 {
        let t = step as f64;
        let bmi = HealthObservation { bmi: Some(15.0 + t * 0.5), ..Default::default() };
        let bp = HealthObservation { systolic_bp: Some(80 + step * 2), ..Default::default() };
        let sugar = HealthObservation { blood_sugar: Some(60.0 + t * 2.0), ..Default::default() };
        let age = HealthObservation { age: Some(25 + step), ..Default::default() };

        let current = (
            engine.assess(&bmi).diabetes_risk,
            engine.assess(&bp).cardiovascular_risk,
            engine.assess(&sugar).diabetes_risk,
            engine.assess(&age).diabetes_risk,
        );

        assert!(current.0 >= previous.0);
        assert!(current.1 >= previous.1);
        assert!(current.2 >= previous.2);
        assert!(current.3 >= previous.3);
        previous = current;
    }
}

#[test]
fn test_less_exercise_never_lowers_risk() {
    let engine = RiskEngine::with_defaults();
    let levels = [
        ExerciseFrequency::VeryActive,
        ExerciseFrequency::Regular,
        ExerciseFrequency::Occasional,
        ExerciseFrequency::Sedentary,
    ];

    let scores: Vec<f64> = levels
        .iter()
        .map(|level| {
            engine
                .assess(&HealthObservation {
                    exercise_frequency: Some(*level),
                    ..Default::default()
                })
                .overall_risk_score
        })
        .collect();

    assert!(scores.windows(2).all(|w| w[0] <= w[1]), "{:?}", scores);
}

#[test]
fn test_assess_is_idempotent() {
    let engine = RiskEngine::with_defaults();

    for obs in sample_observations() {
        assert_eq!(engine.assess(&obs), engine.assess(&obs));
    }
}

#[test]
fn test_empty_observation_returns_complete_profile() {
    let engine = RiskEngine::with_defaults();
    let profile = engine.assess(&HealthObservation::default());

    // defaults: bmi 25, bp 120, cholesterol 200, sugar 100, age 30, no exercise
    let cardio = 0.2 * (6.5 / 11.5) + 0.3 * 0.6 + 0.2 * 0.5 + 0.1;
    let diabetes = 0.3 * (6.5 / 11.5) + 0.3 * (30.0 / 56.0) + 0.2;

    assert!((profile.cardiovascular_risk - cardio).abs() < 1e-9);
    assert!((profile.diabetes_risk - diabetes).abs() < 1e-9);
    assert_eq!(profile.respiratory_risk, 0.5);
    assert_eq!(profile.metabolic_risk, 0.5);
    assert_eq!(profile.lifestyle_risk, 0.5);
    assert!(profile.recommendations.is_empty());
}

#[test]
fn test_reference_cardiovascular_scenario() {
    let engine = RiskEngine::with_defaults();
    let obs = HealthObservation {
        bmi: Some(25.0),
        systolic_bp: Some(120),
        diastolic_bp: Some(80),
        cholesterol: Some(200.0),
        smoking_status: Some(SmokingStatus::Never),
        exercise_frequency: Some(ExerciseFrequency::Regular),
        ..Default::default()
    };

    let profile = engine.assess(&obs);
    assert!((profile.cardiovascular_risk - 0.443).abs() < 1e-3);
}

#[test]
fn test_high_risk_scenario_no_duplicates_across_calls() {
    let engine = RiskEngine::with_defaults();
    let obs = HealthObservation {
        bmi: Some(35.0),
        systolic_bp: Some(150),
        cholesterol: Some(260.0),
        smoking_status: Some(SmokingStatus::Current),
        exercise_frequency: Some(ExerciseFrequency::Sedentary),
        ..Default::default()
    };

    for _ in 0..3 {
        let profile = engine.assess(&obs);
        assert!(profile.cardiovascular_risk > 0.7);

        for rec in [
            "Schedule a cardiac check-up",
            "Monitor blood pressure daily",
            "Reduce salt intake",
            "Start a regular exercise program",
        ] {
            let count = profile.recommendations.iter().filter(|r| *r == rec).count();
            assert_eq!(count, 1, "{} appeared {} times", rec, count);
        }
    }
}

#[test]
fn test_threshold_boundary() {
    let at_threshold = RiskAggregator::default().with_scorer(Arc::new(
        ConstantScorer::new(RiskCategory::Cardiovascular, 0.7).unwrap(),
    ));
    let just_over = RiskAggregator::default().with_scorer(Arc::new(
        ConstantScorer::new(RiskCategory::Cardiovascular, 0.7000001).unwrap(),
    ));

    let engine_at = RiskEngine::new(Normalizer::default(), at_threshold, RecommendationCatalog::default());
    let engine_over = RiskEngine::new(Normalizer::default(), just_over, RecommendationCatalog::default());
    let obs = HealthObservation::default();

    assert!(engine_at.assess(&obs).recommendations.is_empty());
    assert_eq!(engine_over.assess(&obs).recommendations.len(), 4);
}

#[test]
fn test_respiratory_over_threshold_adds_nothing() {
    let aggregator = RiskAggregator::default().with_scorer(Arc::new(
        ConstantScorer::new(RiskCategory::Respiratory, 1.0).unwrap(),
    ));
    let engine = RiskEngine::new(Normalizer::default(), aggregator, RecommendationCatalog::default());

    let profile = engine.assess(&HealthObservation::default());
    assert_eq!(profile.respiratory_risk, 1.0);
    assert!(profile.recommendations.is_empty());
}

#[test]
fn test_custom_normalization_table() {
    let mut table = NormalizationTable::default();
    table.age.default = 60.0;
    let engine = RiskEngine::new(
        Normalizer::new(table).unwrap(),
        RiskAggregator::default(),
        RecommendationCatalog::default(),
    );

    let defaulted = engine.assess(&HealthObservation::default());
    let baseline = RiskEngine::with_defaults().assess(&HealthObservation::default());

    assert!((defaulted.diabetes_risk - baseline.diabetes_risk - 0.2).abs() < 1e-9);
}

#[test]
fn test_concurrent_assessments_agree() {
    let engine = RiskEngine::with_defaults();
    let observations = sample_observations();
    let expected: Vec<_> = observations.iter().map(|o| engine.assess(o)).collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (obs, want) in observations.iter().zip(&expected) {
                    assert_eq!(&engine.assess(obs), want);
                }
            });
        }
    });
}
