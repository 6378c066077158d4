#[macro_use]
extern crate tracing;

mod codec;
mod display_mode;
mod settings;
mod store;

pub use codec::{
    codec_name,
    CodecPreference,
    PreferredCodec,
};
pub use display_mode::VideoDisplayMode;
pub use settings::{
    AudioConstraints,
    Settings,
    VideoConstraints,
};
pub use store::{
    get_config_dir,
    load,
    save,
    FileStore,
    MemoryStore,
    SettingsStore,
};
