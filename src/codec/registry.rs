use std::collections::HashMap;
use std::sync::OnceLock;

use super::Codec;
use crate::error::{Result, TextcodecError, TransformError};
use crate::types::{CodecMeta, Direction, Encoding};

macro_rules! register_codecs {
    ($($variant:ident => $module:ident :: $codec:ident),* $(,)?) => {
        /// Exhaustive: every `Encoding` must name a codec.
        fn codec_for(encoding: Encoding) -> &'static dyn Codec {
            match encoding {
                $(Encoding::$variant => &super::$module::$codec,)*
            }
        }

        fn build_registry() -> Registry {
            let mut name_map = HashMap::new();
            for encoding in Encoding::ALL {
                let codec = codec_for(encoding);
                assert_eq!(
                    codec.name(),
                    encoding.as_str(),
                    "codec registered under the wrong encoding"
                );
                if name_map.insert(codec.name(), encoding).is_some() {
                    panic!("duplicate codec name '{}'", codec.name());
                }
            }
            Registry { name_map }
        }
    };
}

register_codecs! {
    Utf8 => hex::Utf8Hex,
    Url => urlencoding::UrlEncoding,
    Hex => hex::Hex,
    Rot13 => rot::Rot13,
    Binary => base2_8::Binary,
    Octal => base2_8::Octal,
    Punycode => punycode::Punycode,
    Morse => morse::Morse,
    Braille => braille::Braille,
    Base64 => base64::Base64,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub struct Registry {
    name_map: HashMap<&'static str, Encoding>,
}

impl Registry {
    fn new() -> Self {
        build_registry()
    }

    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(Registry::new)
    }

    pub fn lookup(&self, name: &str) -> Option<Encoding> {
        self.name_map.get(name).copied()
    }

    pub fn codec(&self, encoding: Encoding) -> &'static dyn Codec {
        codec_for(encoding)
    }

    pub fn get(&self, name: &str) -> Result<&'static dyn Codec> {
        self.lookup(name)
            .map(codec_for)
            .ok_or_else(|| TextcodecError::unsupported_encoding(name))
    }

    pub fn list(&self) -> Vec<CodecMeta> {
        Encoding::ALL.into_iter().map(|e| codec_for(e).meta()).collect()
    }

    pub fn run(&self, direction: Direction, encoding: Encoding, text: &str) -> std::result::Result<String, TransformError> {
        let codec = codec_for(encoding);
        match direction {
            Direction::Encode => Ok(codec.encode(text)),
            Direction::Decode => codec.decode(text).inspect_err(|e| {
                log::debug!("{} decode rejected input: {}", encoding, e.detail());
            }),
        }
    }

    /// Dispatches by name. An unknown name yields `None`; the caller shows
    /// no result.
    pub fn apply(
        &self,
        direction: Direction,
        name: &str,
        text: &str,
    ) -> Option<std::result::Result<String, TransformError>> {
        let Some(encoding) = self.lookup(name) else {
            log::debug!("no {} transform named {:?}", direction.as_str(), name);
            return None;
        };
        log::debug!("{} {} ({} bytes)", direction.as_str(), encoding, text.len());
        Some(self.run(direction, encoding, text))
    }
}
