use super::voices::{self, VoiceInfo};
use super::FormState;
use crate::audio::AudioInfo;
use crate::client::{join_url, SynthesisOutcome};

pub const HELP: &str = "\
Commands:
  text <words>   set the text to speak (empty clears it)
  voice <id>     set the voice, e.g. af_heart
  lang <code>    set the language code, e.g. f
  speed <n>      set the speed, 0.5 to 2.0
  show           show the form
  voices         list known voices and languages
  submit         send the text to the TTS service
  play           play the generated audio
  save [dir]     download the generated audio into dir (default .)
  help           this list
  quit           leave";

pub fn form(state: &FormState, api_base_url: &str) -> String {
    let text = if state.text.is_empty() {
        "(empty)".to_string()
    } else {
        format!("\"{}\"", state.text)
    };

    let language = voices::language_name(&state.lang).unwrap_or("unknown");

    let mut out = format!(
        "text:  {}\nvoice: {}\nlang:  {} ({})\nspeed: {}",
        text, state.voice, state.lang, language, state.speed
    );

    if state.loading() {
        out.push_str("\nstatus: generating...");
    } else if let Some(current) = state.outcome() {
        out.push('\n');
        out.push_str(&outcome(current, api_base_url));
    }

    out
}

pub fn outcome(outcome: &SynthesisOutcome, api_base_url: &str) -> String {
    match outcome {
        SynthesisOutcome::Success { download_path } => {
            format!("Audio ready: {}", join_url(api_base_url, download_path))
        }
        SynthesisOutcome::ApiError { message }
        | SynthesisOutcome::NetworkError { message }
        | SynthesisOutcome::UnexpectedError { message } => message.clone(),
    }
}

pub fn audio_info(info: &AudioInfo) -> String {
    format!(
        "{:.1}s, {} Hz, {} channel{}",
        info.duration_secs,
        info.sample_rate,
        info.channels,
        if info.channels == 1 { "" } else { "s" }
    )
}

pub fn voice_list(list: &[VoiceInfo]) -> String {
    let mut out = String::from("Voices:");
    for voice in list {
        out.push_str(&format!("\n  {:<12} {:<10} {}", voice.id, voice.name, voice.language));
    }

    out.push_str("\nLanguages:");
    for (code, name) in voices::LANGUAGES {
        out.push_str(&format!("\n  {}  {}", code, name));
    }

    out
}
