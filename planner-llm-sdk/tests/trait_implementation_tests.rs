use planner_llm_sdk::client::LlmClient;
use planner_llm_sdk::groq::GroqClient;

#[test]
fn test_all_clients_implement_trait() {
    fn assert_implements_trait<T: LlmClient>() {}

    assert_implements_trait::<GroqClient>();
}

#[test]
fn test_trait_object_usage() {
    let _client: Box<dyn LlmClient> = Box::new(GroqClient::new("test-key").unwrap());
}

#[test]
fn test_provider_and_model_names() {
    let groq_client = GroqClient::new("test-key").unwrap();
    assert_eq!(groq_client.provider_name(), "groq");
    assert_eq!(groq_client.model_name(), "llama-3.3-70b-versatile");

    let custom = GroqClient::new("test-key")
        .unwrap()
        .with_default_model("llama-3.1-8b-instant");
    assert_eq!(custom.model_name(), "llama-3.1-8b-instant");
}
