use reflect_core::config::GenerationConfig;
use reflect_core::persona::PersonaKind;
use reflect_interaction::{ResponseGenerator, TemplateGenerator, build_generator};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_template_generator_contract_through_trait_object() {
    let generator: Arc<dyn ResponseGenerator> =
        Arc::new(TemplateGenerator::new(Duration::from_millis(2000)));

    let reflection = generator
        .generate("I keep avoiding my taxes")
        .await
        .expect("template generation cannot fail");

    let order: Vec<PersonaKind> = reflection.responses.iter().map(|r| r.persona).collect();
    assert_eq!(order, PersonaKind::ALL.to_vec());
    assert!(reflection.responses.iter().all(|r| !r.response.trim().is_empty()));
    assert_eq!(reflection.responses[1].name, "Maya");

    let steps = generator
        .draft_plan(&reflection)
        .await
        .expect("template drafting cannot fail");
    assert!(!steps.is_empty() && steps.len() <= 7);
}

#[tokio::test]
async fn test_configured_template_generator_respects_latency() {
    let config = GenerationConfig {
        latency_ms: 0,
        ..GenerationConfig::default()
    };
    let generator = build_generator(&config).expect("template backend needs no secrets");

    let start = std::time::Instant::now();
    generator.generate("anything").await.unwrap();
    assert!(start.elapsed() < Duration::from_secs(1));
}
