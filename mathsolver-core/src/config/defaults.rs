pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_MODEL_ENDPOINT: &str = "https://api.groq.com/openai";
pub const DEFAULT_MODEL_API_PATH: &str = "/v1/chat/completions";
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

pub const DEFAULT_MAX_STEPS: usize = 15;
pub const DEFAULT_FALLBACK_ANSWER: &str =
    "Agent stopped due to iteration limit before reaching a definitive answer.";

pub const DEFAULT_WIKIPEDIA_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_WIKIPEDIA_TOP_K: usize = 3;
pub const DEFAULT_WIKIPEDIA_MAX_CHARS: usize = 4000;

pub const DEFAULT_BIND: &str = "127.0.0.1:8501";
