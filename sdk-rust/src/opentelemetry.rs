use crate::{GenerationResult, GenerationRequest};
use opentelemetry::trace::Status;
use serde_json::{Map, Value};
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct GenerationSpan {
    span: Span,
    start_time: Instant,
    max_tokens: u32,
    response_chars: Option<usize>,
}

impl GenerationSpan {
    pub fn new(provider: &str, model_id: &str, request: &GenerationRequest) -> Self {
        let span = info_span!("articleforge.generate");
        span.set_attribute("gen_ai.operation.name", "generate_content");
        span.set_attribute("gen_ai.provider.name", provider.to_string());
        span.set_attribute("gen_ai.request.model", model_id.to_string());

        Self {
            span,
            start_time: Instant::now(),
            max_tokens: request.max_output_tokens,
            response_chars: None,
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span()).await
    }

    pub fn on_raw_text(&mut self, text: &str) {
        self.response_chars = Some(text.chars().count());
    }

    pub fn on_error(&mut self, error: &(dyn std::error::Error + 'static)) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        self.span
            .set_attribute("gen_ai.request.max_tokens", i64::from(self.max_tokens));
        if let Some(chars) = self.response_chars {
            self.span.set_attribute(
                "articleforge.response.chars",
                i64::try_from(chars).unwrap_or(i64::MAX),
            );
        }
        self.span.set_attribute(
            "articleforge.duration_seconds",
            self.start_time.elapsed().as_secs_f64(),
        );
    }
}

/// Run one generation inside a span. `send` yields the raw model text and
/// `extract` turns it into the structured result.
pub async fn trace_generate<F, Fut, E>(
    provider: &str,
    model_id: &str,
    request: GenerationRequest,
    send: F,
    extract: E,
) -> GenerationResult<Map<String, Value>>
where
    F: FnOnce(GenerationRequest) -> Fut,
    Fut: std::future::Future<Output = GenerationResult<String>>,
    E: FnOnce(&str) -> GenerationResult<Map<String, Value>>,
{
    let mut span = GenerationSpan::new(provider, model_id, &request);
    let raw = span.instrument_future(send(request)).await;

    let result = raw.and_then(|text| {
        span.on_raw_text(&text);
        tracing::debug!(parent: &span.span, chars = text.len(), "received model output");
        extract(&text)
    });

    if let Err(error) = &result {
        tracing::warn!(parent: &span.span, %error, "generation failed");
        span.on_error(error);
    }

    span.on_end();
    result
}
