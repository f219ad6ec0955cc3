use artifact_store::ArtifactSink;

use crate::{
    crawl::Crawler, llm::generator::ScriptGenerator, tts::SpeechSynthesizer, PodcastPipeline,
};

pub struct PodcastPipelineBuilder<C = (), G = (), S = (), A = ()> {
    crawler: C,
    generator: G,
    synthesizer: S,
    sink: A,
}

impl PodcastPipelineBuilder {
    pub fn new() -> Self {
        Self {
            crawler: (),
            generator: (),
            synthesizer: (),
            sink: (),
        }
    }
}

impl Default for PodcastPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, G, S, A> PodcastPipelineBuilder<C, G, S, A> {
    pub fn crawler<C2: Crawler + Send + Sync + 'static>(
        self,
        crawler: C2,
    ) -> PodcastPipelineBuilder<C2, G, S, A> {
        PodcastPipelineBuilder {
            crawler,
            generator: self.generator,
            synthesizer: self.synthesizer,
            sink: self.sink,
        }
    }

    pub fn generator<G2: ScriptGenerator + Send + Sync + 'static>(
        self,
        generator: G2,
    ) -> PodcastPipelineBuilder<C, G2, S, A> {
        PodcastPipelineBuilder {
            crawler: self.crawler,
            generator,
            synthesizer: self.synthesizer,
            sink: self.sink,
        }
    }

    pub fn synthesizer<S2: SpeechSynthesizer + Send + Sync + 'static>(
        self,
        synthesizer: S2,
    ) -> PodcastPipelineBuilder<C, G, S2, A> {
        PodcastPipelineBuilder {
            crawler: self.crawler,
            generator: self.generator,
            synthesizer,
            sink: self.sink,
        }
    }

    pub fn sink<A2: ArtifactSink + Send + Sync + 'static>(
        self,
        sink: A2,
    ) -> PodcastPipelineBuilder<C, G, S, A2> {
        PodcastPipelineBuilder {
            crawler: self.crawler,
            generator: self.generator,
            synthesizer: self.synthesizer,
            sink,
        }
    }
}

impl<C, G, S, A> PodcastPipelineBuilder<C, G, S, A>
where
    C: Crawler + Send + Sync + 'static,
    G: ScriptGenerator + Send + Sync + 'static,
    S: SpeechSynthesizer + Send + Sync + 'static,
    A: ArtifactSink + Send + Sync + 'static,
{
    pub fn build(self) -> PodcastPipeline<C, G, S, A> {
        PodcastPipeline {
            crawler: self.crawler,
            generator: self.generator,
            synthesizer: self.synthesizer,
            sink: self.sink,
        }
    }
}
