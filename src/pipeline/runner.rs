//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of stages.
//! Calling [`Pipeline::run`] executes them in order (tokenize, filter,
//! rank), threading artifacts between stages and notifying a
//! [`PipelineObserver`] at each boundary.

use crate::nlp::tokenizer::AnyTokenizer;
use crate::pipeline::artifacts::RankOutput;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReportBuilder, STAGE_FILTER, STAGE_RANK, STAGE_TOKENIZE,
};
use crate::pipeline::traits::{
    FrequencyRanker, LanguageTokenFilter, Ranker, TokenFilter, Tokenizer,
};
use crate::types::{ExtractorConfig, Language, StopwordSet};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline — statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Tok` | [`Tokenizer`] | [`AnyTokenizer`] (delimiter split) |
/// | `Flt` | [`TokenFilter`] | [`LanguageTokenFilter`] |
/// | `Rnk` | [`Ranker`] | [`FrequencyRanker`] |
#[derive(Debug, Clone)]
pub struct Pipeline<Tok, Flt, Rnk> {
    pub tokenizer: Tok,
    pub filter: Flt,
    pub ranker: Rnk,
}

/// Type alias for the default keyword pipeline.
pub type KeywordPipeline = Pipeline<AnyTokenizer, LanguageTokenFilter, FrequencyRanker>;

impl KeywordPipeline {
    /// Build the pipeline described by `cfg`: its tokenizer kind, stopword
    /// tables and extra stopwords.
    pub fn from_config(cfg: &ExtractorConfig) -> Self {
        let filter = match cfg.stopwords {
            StopwordSet::Default => LanguageTokenFilter::new(),
            StopwordSet::Extended => LanguageTokenFilter::extended(),
        };
        Pipeline {
            tokenizer: AnyTokenizer::from_kind(cfg.tokenizer),
            filter: filter.with_extra_stopwords(&cfg.extra_stopwords),
            ranker: FrequencyRanker,
        }
    }
}

impl Default for KeywordPipeline {
    fn default() -> Self {
        Self::from_config(&ExtractorConfig::default())
    }
}

impl<Tok, Flt, Rnk> Pipeline<Tok, Flt, Rnk>
where
    Tok: Tokenizer,
    Flt: TokenFilter,
    Rnk: Ranker,
{
    /// Execute the pipeline over `text`, returning at most `limit` keywords.
    ///
    /// Input validation (blank text, limit clamping) is the caller's job; an
    /// empty text simply produces an empty output here.
    pub fn run(
        &self,
        text: &str,
        language: Language,
        limit: usize,
        cfg: &ExtractorConfig,
        observer: &mut impl PipelineObserver,
    ) -> RankOutput {
        // Stage 1: Tokenize
        trace_stage!(STAGE_TOKENIZE);
        observer.on_stage_start(STAGE_TOKENIZE);
        let clock = StageClock::start();
        let tokens = self.tokenizer.tokenize(text);
        let report = StageReportBuilder::new(clock.elapsed())
            .items_out(tokens.len())
            .build();
        observer.on_stage_end(STAGE_TOKENIZE, &report);
        observer.on_tokens(&tokens);

        // Stage 2: Filter
        trace_stage!(STAGE_FILTER);
        observer.on_stage_start(STAGE_FILTER);
        let clock = StageClock::start();
        let candidates = self.filter.select(&tokens, language, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .items_in(tokens.len())
            .items_out(candidates.len())
            .build();
        observer.on_stage_end(STAGE_FILTER, &report);
        observer.on_candidates(&candidates);

        // Stage 3: Rank
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let output = self.ranker.rank(&candidates, limit, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .items_in(output.distinct)
            .items_out(output.len())
            .build();
        observer.on_stage_end(STAGE_RANK, &report);
        observer.on_rank(&output);

        output
    }
}

// ============================================================================
// PipelineBuilder — fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// ```
/// # use rapid_keywords::pipeline::runner::PipelineBuilder;
/// # use rapid_keywords::pipeline::traits::LanguageTokenFilter;
/// let pipeline = PipelineBuilder::new()
///     .filter(LanguageTokenFilter::extended())
///     .build();
/// ```
pub struct PipelineBuilder<Tok = AnyTokenizer, Flt = LanguageTokenFilter, Rnk = FrequencyRanker> {
    tokenizer: Tok,
    filter: Flt,
    ranker: Rnk,
}

impl PipelineBuilder {
    /// Start building from the default stages.
    pub fn new() -> Self {
        PipelineBuilder {
            tokenizer: AnyTokenizer::default(),
            filter: LanguageTokenFilter::new(),
            ranker: FrequencyRanker,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tok, Flt, Rnk> PipelineBuilder<Tok, Flt, Rnk> {
    /// Override the tokenizer stage.
    pub fn tokenizer<T: Tokenizer>(self, t: T) -> PipelineBuilder<T, Flt, Rnk> {
        PipelineBuilder {
            tokenizer: t,
            filter: self.filter,
            ranker: self.ranker,
        }
    }

    /// Override the filter stage.
    pub fn filter<F: TokenFilter>(self, f: F) -> PipelineBuilder<Tok, F, Rnk> {
        PipelineBuilder {
            tokenizer: self.tokenizer,
            filter: f,
            ranker: self.ranker,
        }
    }

    /// Override the ranker stage.
    pub fn ranker<R: Ranker>(self, r: R) -> PipelineBuilder<Tok, Flt, R> {
        PipelineBuilder {
            tokenizer: self.tokenizer,
            filter: self.filter,
            ranker: r,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<Tok, Flt, Rnk> {
        Pipeline {
            tokenizer: self.tokenizer,
            filter: self.filter,
            ranker: self.ranker,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
