//! Message routing and intent classification for the Courier middleware.
//!
//! Takes free-text user input and produces a routing decision: the workflow
//! category the message should be dispatched to, with a confidence score and
//! a human-readable rationale. The pipeline is:
//! 1. **Normalizer**: lower-case, strip punctuation, extract keyword lemmas
//! 2. **Entity extractor**: date/time literals from the raw text
//! 3. **Intent detector**: question/request/command/information/help
//! 4. **Scorer**: weighted keyword + pattern evidence per category
//! 5. **Context adjuster**: recent-workflow and time-of-day boosts
//! 6. **Selector**: max score, fallback floor, confidence clamp
//! 7. **Reasoning generator**: short narrative for the decision
//!
//! Every stage is pure; one classification call performs no I/O, takes no
//! locks, and shares nothing mutable with concurrent calls.
pub mod catalog;
pub mod context;
pub mod entities;
pub mod intent;
pub mod normalize;
pub mod reasoning;
pub mod scorer;
pub mod selector;

use async_trait::async_trait;
use tracing::debug;

use courier_types::errors::CourierError;
use courier_types::messages::{AnalysisContext, ContentAnalysis};
use courier_types::traits::ContentClassifier;

use crate::catalog::WorkflowCatalog;
use crate::entities::EntityExtractor;
use crate::intent::IntentDetector;
use crate::normalize::Normalizer;

/// The classifier instance.
///
/// Owns the immutable category table and the compiled pattern sets. Build it
/// once at process start and share it read-only across all call sites; there
/// is no hidden global instance.
pub struct MessageClassifier {
    normalizer: Normalizer,
    entities: EntityExtractor,
    intents: IntentDetector,
    catalog: WorkflowCatalog,
}

impl MessageClassifier {
    /// Construct the classifier, compiling all pattern tables.
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
            entities: EntityExtractor::new(),
            intents: IntentDetector::new(),
            catalog: WorkflowCatalog::new(),
        }
    }

    /// Classify one message.
    ///
    /// Deterministic for a fixed input and context. Empty input is not an
    /// error: it yields the general-fallback decision with empty keywords,
    /// no intent, and no entities. Keyword extraction may degrade internally
    /// (oversized input); that path proceeds with zero keyword evidence.
    pub fn analyze(&self, content: &str, context: Option<&AnalysisContext>) -> ContentAnalysis {
        let normalized = self.normalizer.normalize(content);

        // Entity extraction and intent detection read the raw text; neither
        // depends on the other or on normalization.
        let entities = self.entities.extract(content);
        let intent = self.intents.detect(content);

        let extraction = self.normalizer.extract_keywords(&normalized);
        let keywords = extraction.keywords().to_vec();

        let mut scores = scorer::score_all(&self.catalog, content, &keywords);
        context::apply_context(&mut scores, context);

        let (recommended, confidence) = selector::select(&scores);
        let reasoning = reasoning::explain(recommended, &scores, &keywords);

        debug!(
            workflow = %recommended,
            confidence,
            keyword_count = keywords.len(),
            degraded = extraction.is_degraded(),
            "classified message"
        );

        ContentAnalysis {
            recommended_workflow: recommended,
            confidence,
            reasoning,
            keywords,
            intent,
            entities,
        }
    }
}

impl Default for MessageClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentClassifier for MessageClassifier {
    async fn analyze(
        &self,
        content: &str,
        context: Option<&AnalysisContext>,
    ) -> Result<ContentAnalysis, CourierError> {
        Ok(MessageClassifier::analyze(self, content, context))
    }
}
