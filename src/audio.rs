use viz_core::{AnalyserConfig, SampleSource};
use web_sys as web;

/// WebAudio analyser tapped off a media element.
///
/// Graph: media element source -> analyser, and source -> destination so
/// the element still plays through the speakers.
pub struct WebAnalyser {
    _audio_ctx: web::AudioContext,
    _source: web::MediaElementAudioSourceNode,
    analyser: web::AnalyserNode,
}

impl WebAnalyser {
    pub fn connect(
        element: &web::HtmlMediaElement,
        config: &AnalyserConfig,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        _ = audio_ctx.resume();
        let source = audio_ctx
            .create_media_element_source(element)
            .map_err(|e| anyhow::anyhow!("MediaElementSource error: {:?}", e))?;
        let analyser = web::AnalyserNode::new(&audio_ctx)
            .map_err(|e| anyhow::anyhow!("AnalyserNode error: {:?}", e))?;
        analyser.set_fft_size(config.fft_size);
        analyser.set_smoothing_time_constant(config.smoothing_time_constant);

        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| anyhow::anyhow!("connect analyser: {:?}", e))?;
        source
            .connect_with_audio_node(&audio_ctx.destination())
            .map_err(|e| anyhow::anyhow!("connect destination: {:?}", e))?;

        log::info!(
            "[audio] analyser fft={} bins={} rate={}",
            analyser.fft_size(),
            analyser.frequency_bin_count(),
            audio_ctx.sample_rate()
        );
        Ok(Self {
            _audio_ctx: audio_ctx,
            _source: source,
            analyser,
        })
    }
}

impl SampleSource for WebAnalyser {
    fn fill_time_domain(&mut self, out: &mut [u8]) {
        self.analyser.get_byte_time_domain_data(out);
    }

    fn fill_frequency(&mut self, out: &mut [u8]) {
        self.analyser.get_byte_frequency_data(out);
    }
}
