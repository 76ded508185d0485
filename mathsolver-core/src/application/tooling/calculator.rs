use super::error::ToolInvokeError;
use super::interface::Tool;
use crate::infrastructure::model::ChatModel;
use async_trait::async_trait;
use evalexpr::Value;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

const NAME: &str = "Calculator";
const DESCRIPTION: &str = "Use for math expressions and calculations";

const TRANSLATE_PROMPT: &str = r#"Translate a math problem into a single-line arithmetic expression that can be evaluated numerically.
Use only numbers, + - * / % ^ (power), parentheses, the constants pi and e, and the functions sqrt, cbrt, sin, cos, tan, asin, acos, atan, ln, log, log2, log10, exp, abs, floor, ceil, round, min, max.
Write the expression inside a text block and stop; the result will be computed for you.

Question: What is 37593 * 67?
```text
37593 * 67
```
```output
2518731
```
Answer: 2518731

Question: 37593^(1/5)
```text
37593^(1/5)
```
```output
8.222831614237718
```
Answer: 8.222831614237718

Question: {question}
"#;

const OUTPUT_FENCE: &str = "```output";

static TEXT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```text\s*(.*?)```").expect("valid text block pattern"));
static FUNCTION_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(sqrt|cbrt|sin|cos|tan|asin|acos|atan|ln|log10|log2|log|exp|abs)\s*\(")
        .expect("valid function pattern")
});
static CONSTANT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(pi|e)\b").expect("valid constant pattern"));
static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d*\.\d+(?:[eE][+-]?\d+)?|\b\d+\.?\d*(?:[eE][+-]?\d+)?").expect("valid number pattern")
});

/// Asks the model for an expression, then evaluates it locally.
pub struct CalculatorTool {
    model: ChatModel,
}

impl CalculatorTool {
    pub fn new(model: ChatModel) -> Self {
        Self { model }
    }
}

#[async_trait]
impl Tool for CalculatorTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    async fn invoke(&self, input: &str) -> Result<String, ToolInvokeError> {
        let prompt = TRANSLATE_PROMPT.replace("{question}", input.trim());
        let reply = self.model.complete(prompt, &[OUTPUT_FENCE]).await?;
        debug!(reply = reply.as_str(), "Calculator translation received");
        interpret_reply(&reply)
    }
}

fn interpret_reply(reply: &str) -> Result<String, ToolInvokeError> {
    let trimmed = reply.trim();
    if let Some(captures) = TEXT_BLOCK.captures(trimmed) {
        let expression = captures[1].trim();
        let value = evaluate_expression(expression)?;
        return Ok(format!("Answer: {value}"));
    }
    if trimmed.starts_with("Answer:") {
        return Ok(trimmed.to_string());
    }
    if let Some((_, answer)) = trimmed.split_once("Answer:") {
        return Ok(format!("Answer: {}", answer.trim()));
    }
    Err(ToolInvokeError::Translation(format!(
        "unknown format from model: {trimmed}"
    )))
}

/// Evaluate an arithmetic expression with float semantics, so `7 / 2` is `3.5`.
pub fn evaluate_expression(expression: &str) -> Result<String, ToolInvokeError> {
    let normalized = normalize(expression);
    let failure = |reason: String| ToolInvokeError::Evaluation {
        expression: expression.to_string(),
        reason,
    };

    match evalexpr::eval(&normalized).map_err(|err| failure(err.to_string()))? {
        Value::Float(value) if value.is_finite() => Ok(format_number(value)),
        Value::Float(value) => Err(failure(format!("result is not finite ({value})"))),
        Value::Int(value) => Ok(value.to_string()),
        Value::Boolean(value) => Ok(value.to_string()),
        other => Err(failure(format!("expression did not produce a number: {other}"))),
    }
}

fn normalize(expression: &str) -> String {
    let floats = NUMBER.replace_all(expression.trim(), |caps: &Captures| {
        let literal = &caps[0];
        if literal.contains(['.', 'e', 'E']) {
            literal.to_string()
        } else {
            format!("{literal}.0")
        }
    });
    let powers = floats.replace("**", "^");
    let constants = CONSTANT.replace_all(&powers, |caps: &Captures| match &caps[1] {
        "pi" => format!("{:?}", std::f64::consts::PI),
        _ => format!("{:?}", std::f64::consts::E),
    });
    FUNCTION_CALL
        .replace_all(&constants, |caps: &Captures| {
            let name = match &caps[1] {
                "log" => "ln",
                other => other,
            };
            format!("math::{name}(")
        })
        .into_owned()
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
