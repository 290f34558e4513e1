//! Mappers: decide which policy (and arguments) applies to an event.
//!
//! A mapper never fails for a well-formed event. When nothing matches it
//! returns the random fallback, so the engine always has a policy to call.

use event::InputEvent;
use eventmap::{EventMap, PolicyKind, RuleSet};

/// Run-mode flags consumed at mapper construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeFlags {
    /// Sound channel keys to `deterministic` instead of `random`.
    pub deterministic_sounds: bool,
    /// Glyphs render upper-cased.
    pub uppercase: bool,
}

/// A mapper's answer: which policy to call, with which static arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The policy to invoke.
    pub policy: PolicyKind,
    /// Static arguments from the matched rule, if any.
    pub args: Vec<String>,
}

impl Request {
    /// A request with no arguments.
    fn bare(policy: PolicyKind) -> Self {
        Self {
            policy,
            args: Vec::new(),
        }
    }
}

/// The closed set of mappers.
#[derive(Debug, Clone)]
pub enum Mapper {
    /// Fixed built-in sound behavior.
    LegacySound {
        /// Whether the deterministic-sounds mode is active.
        deterministic: bool,
    },
    /// Fixed built-in image behavior: glyphs for alphanumerics, random otherwise.
    LegacyImage,
    /// Ordered rules from an extension document; first match wins.
    Declarative(RuleSet),
}

impl Mapper {
    /// Decide the policy and arguments for `event`. Never fails.
    pub fn map(&self, event: &InputEvent) -> Request {
        match self {
            Self::LegacySound { deterministic } => {
                if *deterministic {
                    Request::bare(PolicyKind::Deterministic)
                } else {
                    Request::bare(PolicyKind::Random)
                }
            }
            Self::LegacyImage => {
                if event.ch.is_some_and(char::is_alphanumeric) {
                    Request::bare(PolicyKind::Font)
                } else {
                    Request::bare(PolicyKind::Random)
                }
            }
            Self::Declarative(rules) => match rules.first_match(event) {
                Some(rule) => Request {
                    policy: rule.policy,
                    args: rule.args.clone(),
                },
                None => Request::bare(PolicyKind::Random),
            },
        }
    }
}

/// Build the per-channel mappers from an optional rule document.
///
/// A channel whose key is absent from the document keeps the legacy mapper,
/// so an extension defining only `sound` still produces images. A channel
/// present with an empty rule list becomes a declarative mapper that always
/// falls back to `(random, [])` rather than going silent.
pub fn build_mappers(event_map: Option<EventMap>, flags: &ModeFlags) -> (Mapper, Mapper) {
    let map = event_map.unwrap_or_default();
    let sound = match map.sound {
        Some(rules) => Mapper::Declarative(rules),
        None => Mapper::LegacySound {
            deterministic: flags.deterministic_sounds,
        },
    };
    let image = match map.image {
        Some(rules) => Mapper::Declarative(rules),
        None => Mapper::LegacyImage,
    };
    (sound, image)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter() -> InputEvent {
        InputEvent::key_down(97, Some('a'))
    }

    fn arrow() -> InputEvent {
        InputEvent::key_down(273, None)
    }

    #[test]
    fn legacy_sound_follows_the_deterministic_flag() {
        let random = Mapper::LegacySound {
            deterministic: false,
        };
        let fixed = Mapper::LegacySound {
            deterministic: true,
        };
        assert_eq!(random.map(&letter()).policy, PolicyKind::Random);
        assert_eq!(fixed.map(&letter()).policy, PolicyKind::Deterministic);
    }

    #[test]
    fn legacy_image_fonts_alphanumerics_only() {
        let mapper = Mapper::LegacyImage;
        assert_eq!(mapper.map(&letter()).policy, PolicyKind::Font);
        assert_eq!(
            mapper.map(&InputEvent::key_down(55, Some('7'))).policy,
            PolicyKind::Font
        );
        assert_eq!(
            mapper.map(&InputEvent::key_down(32, Some(' '))).policy,
            PolicyKind::Random
        );
        assert_eq!(mapper.map(&arrow()).policy, PolicyKind::Random);
    }

    #[test]
    fn declarative_first_match_and_fallback() {
        let map = eventmap::load_from_str(
            r#"
apiVersion: 0
sound:
  - check:
      - unicode:
          value: "a"
    policy: named_file
    args: ["a.ogg"]
"#,
            None,
        )
        .unwrap();
        let mapper = Mapper::Declarative(map.sound.unwrap());

        let hit = mapper.map(&letter());
        assert_eq!(hit.policy, PolicyKind::NamedFile);
        assert_eq!(hit.args, vec!["a.ogg".to_string()]);

        // Exhausted rule list falls back to the guaranteed random request.
        let miss = mapper.map(&InputEvent::key_down(122, Some('z')));
        assert_eq!(miss.policy, PolicyKind::Random);
        assert!(miss.args.is_empty());
    }

    #[test]
    fn absent_channel_keeps_the_legacy_mapper() {
        let map = eventmap::load_from_str("apiVersion: 0\nsound: []\n", None).unwrap();
        let (sound, image) = build_mappers(Some(map), &ModeFlags::default());
        assert!(matches!(sound, Mapper::Declarative(_)));
        assert!(matches!(image, Mapper::LegacyImage));
    }

    #[test]
    fn empty_channel_list_always_falls_back() {
        let map = eventmap::load_from_str("apiVersion: 0\nimage: []\n", None).unwrap();
        let (_, image) = build_mappers(Some(map), &ModeFlags::default());
        assert!(matches!(image, Mapper::Declarative(_)));
        assert_eq!(image.map(&letter()).policy, PolicyKind::Random);
        assert_eq!(image.map(&arrow()).policy, PolicyKind::Random);
    }

    #[test]
    fn no_document_means_both_legacy_mappers() {
        let flags = ModeFlags {
            deterministic_sounds: true,
            uppercase: false,
        };
        let (sound, image) = build_mappers(None, &flags);
        assert!(matches!(
            sound,
            Mapper::LegacySound {
                deterministic: true
            }
        ));
        assert!(matches!(image, Mapper::LegacyImage));
    }
}
