// Dispatch loop tests - end-to-end runs through MathAssistant
//
// The model is scripted; the Calculator evaluates for real and the
// encyclopedia is an in-memory stub.

use async_trait::async_trait;
use mathsolver_core::agent::{AgentOptions, StopReason};
use mathsolver_core::assistant::{MathAssistant, SubmitOutcome, build_registry};
use mathsolver_core::config::AppConfig;
use mathsolver_core::model::{ChatModel, ModelError, ModelProvider, ModelRequest, ModelResponse};
use mathsolver_core::session::SessionStore;
use mathsolver_core::types::MessageRole;
use mathsolver_core::wikipedia::{Encyclopedia, EncyclopediaError, PageSummary};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
struct ScriptedProvider {
    responses: Arc<Mutex<Vec<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedProvider {
    fn new(responses: &[&str]) -> Self {
        Self {
            responses: Arc::new(Mutex::new(
                responses.iter().map(|r| r.to_string()).collect(),
            )),
            prompts: Arc::default(),
        }
    }

    async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

#[async_trait]
impl ModelProvider for ScriptedProvider {
    fn id(&self) -> &str {
        "scripted"
    }

    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        self.prompts
            .lock()
            .await
            .push(request.messages[0].content.clone());
        let mut responses = self.responses.lock().await;
        let reply = if responses.len() > 1 {
            responses.remove(0)
        } else {
            responses.first().cloned().unwrap_or_default()
        };
        Ok(ModelResponse::new(reply))
    }
}

struct Library;

#[async_trait]
impl Encyclopedia for Library {
    async fn search(&self, query: &str) -> Result<Vec<PageSummary>, EncyclopediaError> {
        if query.contains("Pythagor") {
            Ok(vec![PageSummary {
                title: "Pythagorean theorem".into(),
                summary: "In a right triangle, a^2 + b^2 = c^2.".into(),
            }])
        } else {
            Ok(Vec::new())
        }
    }
}

fn assistant(provider: &ScriptedProvider, options: AgentOptions) -> MathAssistant {
    let model = ChatModel::new(Arc::new(provider.clone()), "llama-3.1-8b-instant");
    let registry =
        build_registry(&AppConfig::default(), model.clone(), Arc::new(Library)).expect("registry");
    MathAssistant::new(model, registry, options)
}

#[tokio::test]
async fn calculator_result_reaches_the_final_answer() {
    let provider = ScriptedProvider::new(&[
        " I need to divide.\nAction: Calculator\nAction Input: 7 / 2",
        "```text\n7 / 2\n```",
        " I now know the final answer\nFinal Answer: 3.5",
    ]);
    let assistant = assistant(&provider, AgentOptions::default());
    let mut session = SessionStore::new("Hi");

    let SubmitOutcome::Answered { answer, steps } =
        assistant.submit(&mut session, "What is 7 divided by 2?").await
    else {
        panic!("expected an answer");
    };

    assert_eq!(answer, "3.5");
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].observation, "Answer: 3.5");

    let prompts = provider.prompts().await;
    assert_eq!(prompts.len(), 3);
    assert!(prompts[2].contains("Observation: Answer: 3.5"));
}

#[tokio::test]
async fn wikipedia_summary_is_observed() {
    let provider = ScriptedProvider::new(&[
        "Action: Wikipedia\nAction Input: Pythagorean theorem",
        "Final Answer: a^2 + b^2 = c^2",
    ]);
    let assistant = assistant(&provider, AgentOptions::default());
    let mut session = SessionStore::new("Hi");

    let SubmitOutcome::Answered { steps, .. } =
        assistant.submit(&mut session, "State the Pythagorean theorem").await
    else {
        panic!("expected an answer");
    };

    assert_eq!(
        steps[0].observation,
        "Page: Pythagorean theorem\nSummary: In a right triangle, a^2 + b^2 = c^2."
    );
}

#[tokio::test]
async fn step_limit_returns_configured_fallback() {
    let provider = ScriptedProvider::new(&["Action: Wikipedia\nAction Input: nothing useful"]);
    let options = AgentOptions {
        max_steps: 2,
        fallback_answer: "Gave up.".into(),
        ..AgentOptions::default()
    };
    let assistant = assistant(&provider, options);
    let mut session = SessionStore::new("Hi");

    let outcome = assistant.submit(&mut session, "Loop").await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Answered { ref answer, ref steps } if answer == "Gave up." && steps.len() == 2
    ));
    assert_eq!(provider.prompts().await.len(), 2);
    assert_eq!(session.all()[2].content(), "Gave up.");
}

#[tokio::test]
async fn follow_up_question_sees_previous_turns() {
    let provider = ScriptedProvider::new(&["Final Answer: 4", "Final Answer: 8"]);
    let assistant = assistant(&provider, AgentOptions::default());
    let mut session = SessionStore::new("Hi");

    assistant.submit(&mut session, "What is 2+2?").await;
    assistant.submit(&mut session, "Double it").await;

    let prompts = provider.prompts().await;
    assert!(prompts[1].contains("Question: Double it"));
    assert!(prompts[1].contains("user: What is 2+2?"));
    assert!(prompts[1].contains("assistant: 4"));

    let roles: Vec<_> = session.all().iter().map(|turn| turn.role()).collect();
    assert_eq!(
        roles,
        vec![
            MessageRole::Assistant,
            MessageRole::User,
            MessageRole::Assistant,
            MessageRole::User,
            MessageRole::Assistant,
        ]
    );
}

#[tokio::test]
async fn stop_reason_is_reported_by_the_loop() {
    use mathsolver_core::agent::Agent;

    let provider = ScriptedProvider::new(&["Final Answer: 1"]);
    let model = ChatModel::new(Arc::new(provider.clone()), "m");
    let registry =
        build_registry(&AppConfig::default(), model.clone(), Arc::new(Library)).expect("registry");
    let agent = Agent::new(model, registry);
    let session = {
        let mut store = SessionStore::new("Hi");
        store.append(mathsolver_core::types::ConversationTurn::user("1?"));
        store
    };

    let outcome = agent
        .run(session.all(), &AgentOptions::default())
        .await
        .expect("run");
    assert_eq!(outcome.stopped, StopReason::FinalAnswer);
    assert_eq!(outcome.model_calls, 1);
}
