use symdrift::{compute_tau, explain_tau, TimefieldInputs};

#[test]
fn test_reference_tau() {
    assert_eq!(compute_tau(0.5, 1.0, 2.0), 1.5);
    assert_eq!(TimefieldInputs::new(0.5, 1.0, 2.0).evaluate().tau, 1.5);
}

#[test]
fn test_explanation_field_order() {
    let line = explain_tau(0.5, 1.0, 2.0);
    let fields: Vec<&str> = line.split(" | ").collect();

    assert_eq!(
        fields,
        vec![
            "γ (coherence): 0.50",
            "Δ𝓜 (memory rate): 1.00",
            "∇S (entropy): 2.00",
            "τ (symbolic time drift): 1.50",
        ]
    );
}

#[test]
fn test_explanation_negative_values() {
    let line = explain_tau(0.25, -3.333, 1.0);
    assert!(line.contains("Δ𝓜 (memory rate): -3.33"));
    assert!(line.ends_with("τ (symbolic time drift): -0.58"));
}

#[test]
fn test_result_serializes() {
    let result = TimefieldInputs::new(0.5, 1.0, 2.0).explain();
    let bytes = bincode::serialize(&result).unwrap();
    let decoded: symdrift::TimefieldResult = bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, result);
}
