pub const DEFAULT_VOICE: &str = "af_heart";
pub const DEFAULT_LANG: &str = "f";

/// Kokoro language codes accepted by the service.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("a", "American English"),
    ("b", "British English"),
    ("e", "Spanish"),
    ("f", "French"),
    ("h", "Hindi"),
    ("i", "Italian"),
    ("j", "Japanese"),
    ("p", "Brazilian Portuguese"),
    ("z", "Mandarin Chinese"),
];

const VOICES: &[&str] = &[
    "af_heart",
    "af_bella",
    "af_nicole",
    "af_sky",
    "am_adam",
    "am_michael",
    "bf_emma",
    "bf_isabella",
    "bm_george",
    "bm_lewis",
    "ef_dora",
    "em_alex",
    "ff_siwis",
    "hf_alpha",
    "hm_omega",
    "if_sara",
    "im_nicola",
    "jf_alpha",
    "jm_kumo",
    "pf_dora",
    "pm_alex",
    "zf_xiaobei",
    "zm_yunjian",
];

#[derive(Debug, Clone, PartialEq)]
pub struct VoiceInfo {
    pub id: String,
    pub name: String,
    pub language: String,
}

impl VoiceInfo {
    pub fn from_id(id: &str) -> Self {
        let language = id
            .chars()
            .next()
            .and_then(|code| language_name(&code.to_string()))
            .unwrap_or("unknown")
            .to_string();

        Self {
            id: id.to_string(),
            name: parse_voice_name(id),
            language,
        }
    }
}

pub fn catalogue() -> Vec<VoiceInfo> {
    VOICES.iter().copied().map(VoiceInfo::from_id).collect()
}

pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

fn parse_voice_name(id: &str) -> String {
    // Pattern: <lang><gender>_<name> (e.g., af_heart -> Heart)
    match id.split_once('_') {
        Some((_, name)) if !name.is_empty() => {
            let mut chars = name.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => id.to_string(),
            }
        }
        _ => id.to_string(),
    }
}
