use serde::{
    Deserialize,
    Serialize,
};

const BEST_QUALITY: &str = "BEST_QUALITY";
const DEFAULT: &str = "DEFAULT";

/// A concrete codec descriptor as reported by the platform capability
/// list and consumed by the transport negotiation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferredCodec {
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdp_fmtp_line: Option<String>,
}

impl PreferredCodec {
    pub fn new(mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            sdp_fmtp_line: None,
        }
    }

    pub fn with_fmtp_line(mime_type: impl Into<String>, sdp_fmtp_line: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            sdp_fmtp_line: Some(sdp_fmtp_line.into()),
        }
    }
}

/// The user-facing codec choice. The two presets are symbolic: they are
/// stored and displayed as-is and only become a concrete codec (or no
/// preference at all) via [`CodecPreference::resolve`] at the point the
/// transport is configured.
///
/// On the wire this has the same shape as [`PreferredCodec`], with the
/// presets carried as the reserved mime types `BEST_QUALITY` and
/// `DEFAULT`, which sit outside the space of real codec identifiers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum CodecPreference {
    /// Let the browser pick whatever it negotiates by default.
    #[default]
    Default,
    /// Preset resolved to a fixed high-quality codec.
    BestQuality,
    /// An explicit user selection from the platform capability list.
    Codec(PreferredCodec),
}

impl CodecPreference {
    /// Translates the symbolic choice into what the transport layer
    /// should actually request. `None` means "impose no preference".
    /// Explicit user selections pass through untouched.
    pub fn resolve(&self) -> Option<PreferredCodec> {
        match self {
            CodecPreference::Default => None,
            CodecPreference::BestQuality => Some(PreferredCodec::with_fmtp_line("video/VP9", "profile-id=2")),
            CodecPreference::Codec(codec) => Some(codec.clone()),
        }
    }
}

/// Human label for a codec mime type. The two preset sentinels get a
/// friendly name, real mime types are echoed back.
pub fn codec_name(mime_type: &str) -> &str {
    match mime_type {
        BEST_QUALITY => "Preset: Best Quality",
        DEFAULT => "Preset: Browser Default",
        other => other,
    }
}

impl std::fmt::Display for CodecPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecPreference::Default => write!(f, "{}", codec_name(DEFAULT)),
            CodecPreference::BestQuality => write!(f, "{}", codec_name(BEST_QUALITY)),
            CodecPreference::Codec(codec) => match &codec.sdp_fmtp_line {
                Some(line) => write!(f, "{} ({line})", codec_name(&codec.mime_type)),
                None => write!(f, "{}", codec_name(&codec.mime_type)),
            },
        }
    }
}

impl From<PreferredCodec> for CodecPreference {
    fn from(codec: PreferredCodec) -> Self {
        match codec.mime_type.as_str() {
            BEST_QUALITY => CodecPreference::BestQuality,
            DEFAULT => CodecPreference::Default,
            _ => CodecPreference::Codec(codec),
        }
    }
}

impl Serialize for CodecPreference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            CodecPreference::Default => PreferredCodec::new(DEFAULT).serialize(serializer),
            CodecPreference::BestQuality => PreferredCodec::new(BEST_QUALITY).serialize(serializer),
            CodecPreference::Codec(codec) => codec.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for CodecPreference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(PreferredCodec::deserialize(deserializer)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn best_quality_resolves_to_vp9_profile_2() {
        assert_eq!(
            CodecPreference::BestQuality.resolve(),
            Some(PreferredCodec::with_fmtp_line("video/VP9", "profile-id=2"))
        );
    }

    #[test]
    fn default_resolves_to_no_preference() {
        assert_eq!(CodecPreference::Default.resolve(), None);
    }

    #[test]
    fn explicit_selection_passes_through_unchanged() {
        let h264 = PreferredCodec::with_fmtp_line("video/H264", "profile-level-id=42e01f");
        assert_eq!(CodecPreference::Codec(h264.clone()).resolve(), Some(h264.clone()));

        let bare = PreferredCodec::new("video/AV1");
        assert_eq!(CodecPreference::Codec(bare.clone()).resolve(), Some(bare));
    }

    #[test]
    fn equality_distinguishes_absent_fmtp_line() {
        let plain = PreferredCodec::new("video/VP9");
        let with_profile = PreferredCodec::with_fmtp_line("video/VP9", "profile-id=2");
        assert_eq!(plain, plain.clone());
        assert_ne!(plain, with_profile);
        assert_ne!(with_profile, PreferredCodec::with_fmtp_line("video/VP8", "profile-id=2"));
    }

    #[test]
    fn sentinels_round_trip_through_wire_shape() {
        let json = serde_json::to_string(&CodecPreference::BestQuality).unwrap();
        assert_eq!(json, r#"{"mimeType":"BEST_QUALITY"}"#);
        assert_eq!(serde_json::from_str::<CodecPreference>(&json).unwrap(), CodecPreference::BestQuality);

        let json = serde_json::to_string(&CodecPreference::Default).unwrap();
        assert_eq!(json, r#"{"mimeType":"DEFAULT"}"#);
        assert_eq!(serde_json::from_str::<CodecPreference>(&json).unwrap(), CodecPreference::Default);
    }

    #[test]
    fn real_codec_round_trips_with_fmtp_line() {
        let pref = CodecPreference::Codec(PreferredCodec::with_fmtp_line("video/VP9", "profile-id=2"));
        let json = serde_json::to_string(&pref).unwrap();
        assert_eq!(json, r#"{"mimeType":"video/VP9","sdpFmtpLine":"profile-id=2"}"#);
        assert_eq!(serde_json::from_str::<CodecPreference>(&json).unwrap(), pref);
    }

    #[test]
    fn display_labels() {
        assert_eq!(CodecPreference::Default.to_string(), "Preset: Browser Default");
        assert_eq!(CodecPreference::BestQuality.to_string(), "Preset: Best Quality");
        assert_eq!(
            CodecPreference::Codec(PreferredCodec::with_fmtp_line("video/VP9", "profile-id=2")).to_string(),
            "video/VP9 (profile-id=2)"
        );
        assert_eq!(CodecPreference::Codec(PreferredCodec::new("video/VP8")).to_string(), "video/VP8");
    }
}
