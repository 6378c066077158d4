use crate::{
    codec::CodecPreference,
    display_mode::VideoDisplayMode,
};
use serde::{
    de::DeserializeOwned,
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};

/// The full configuration snapshot of the screen-sharing client.
///
/// Values of this type only ever exist fully populated: they are built by
/// [`Settings::normalize`] from whatever blob was persisted, edited as a
/// local copy while a settings form is open, and written back in full on
/// confirm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub display_mode: VideoDisplayMode,
    #[serde(default)]
    pub prefer_codec: CodecPreference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bitrate: Option<u32>,
    #[serde(default)]
    pub video_constraints: VideoConstraints,
    #[serde(default)]
    pub audio_constraints: AudioConstraints,
}

/// Requested capture resolution and frame rate for the shared video track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoConstraints {
    pub width: u32,
    pub height: u32,
    pub frame_rate: u32,
}

/// Browser-side audio processing switches, all off by default since the
/// typical source is desktop audio rather than a microphone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioConstraints {
    pub auto_gain_control: bool,
    pub echo_cancellation: bool,
    pub noise_suppression: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: None,
            display_mode: VideoDisplayMode::FitToWindow,
            prefer_codec: CodecPreference::Default,
            max_bitrate: Some(4_194_304),
            video_constraints: VideoConstraints::default(),
            audio_constraints: AudioConstraints::default(),
        }
    }
}

impl Default for VideoConstraints {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            frame_rate: 30,
        }
    }
}

impl Settings {
    /// Rebuilds a complete `Settings` value from an untrusted persisted
    /// blob. Total: any input yields a valid value, never an error.
    ///
    /// Non-object input falls back to the defaults wholesale. Object
    /// input is shallow-merged field by field, with the constraint
    /// objects merged against their own defaults one level deeper so a
    /// blob carrying only `{"videoConstraints": {"width": ...}}` still
    /// gets default height and frame rate. A field of the wrong type or
    /// a `displayMode` outside the known set counts as absent. Unknown
    /// extra fields are dropped.
    pub fn normalize(raw: &Value) -> Self {
        let defaults = Self::default();
        let Some(raw) = raw.as_object() else {
            return defaults;
        };

        Self {
            name: field(raw, "name"),
            display_mode: field(raw, "displayMode").unwrap_or_default(),
            prefer_codec: field(raw, "preferCodec").unwrap_or_default(),
            max_bitrate: field(raw, "maxBitrate").or(defaults.max_bitrate),
            video_constraints: VideoConstraints::merge(raw.get("videoConstraints")),
            audio_constraints: AudioConstraints::merge(raw.get("audioConstraints")),
        }
    }
}

impl VideoConstraints {
    fn merge(raw: Option<&Value>) -> Self {
        let defaults = Self::default();
        let Some(raw) = raw.and_then(Value::as_object) else {
            return defaults;
        };
        Self {
            width: field(raw, "width").unwrap_or(defaults.width),
            height: field(raw, "height").unwrap_or(defaults.height),
            frame_rate: field(raw, "frameRate").unwrap_or(defaults.frame_rate),
        }
    }
}

impl AudioConstraints {
    fn merge(raw: Option<&Value>) -> Self {
        let Some(raw) = raw.and_then(Value::as_object) else {
            return Self::default();
        };
        Self {
            auto_gain_control: field(raw, "autoGainControl").unwrap_or_default(),
            echo_cancellation: field(raw, "echoCancellation").unwrap_or_default(),
            noise_suppression: field(raw, "noiseSuppression").unwrap_or_default(),
        }
    }
}

fn field<T: DeserializeOwned>(raw: &Map<String, Value>, key: &str) -> Option<T> {
    raw.get(key).cloned().and_then(|value| serde_json::from_value(value).ok())
}
