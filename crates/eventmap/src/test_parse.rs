#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use event::{EventKind, InputEvent};

    use crate::*;

    /// The canonical shape: one named-file rule guarded by a character
    /// condition, then an unconditional random fallback.
    const BASIC: &str = r#"
apiVersion: 0
sound:
  - check:
      - unicode:
          value: "a"
    policy: named_file
    args: ["a.ogg"]
  - policy: random
"#;

    #[test]
    fn basic_document_parses() {
        let map = load_from_str(BASIC, None).unwrap();
        assert!(map.image.is_none());
        let sound = map.sound.unwrap();
        assert_eq!(sound.len(), 2);

        let a = InputEvent::key_down(97, Some('a'));
        let hit = sound.first_match(&a).unwrap();
        assert_eq!(hit.policy, PolicyKind::NamedFile);
        assert_eq!(hit.args, vec!["a.ogg".to_string()]);

        let z = InputEvent::key_down(122, Some('z'));
        let fallback = sound.first_match(&z).unwrap();
        assert_eq!(fallback.policy, PolicyKind::Random);
        assert!(fallback.args.is_empty());
    }

    #[test]
    fn wrong_version_is_rejected() {
        let doc = "apiVersion: 1\nsound: []\n";
        match load_from_str(doc, None) {
            Err(Error::UnsupportedVersion { found: Some(1) }) => {}
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn missing_version_is_rejected() {
        let doc = "sound:\n  - policy: random\n";
        match load_from_str(doc, None) {
            Err(Error::UnsupportedVersion { found: None }) => {}
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn unknown_top_level_keys_are_ignored() {
        let doc = "apiVersion: 0\nfutureFeature: true\nsound:\n  - policy: random\n";
        let map = load_from_str(doc, None).unwrap();
        assert_eq!(map.sound.unwrap().len(), 1);
    }

    #[test]
    fn empty_channel_list_yields_empty_rule_set() {
        // An empty list is not the same as an absent key: the channel is
        // declared, it just never matches, so every event falls back.
        let doc = "apiVersion: 0\nimage: []\n";
        let map = load_from_str(doc, None).unwrap();
        assert!(map.sound.is_none());
        let image = map.image.unwrap();
        assert!(image.is_empty());
        assert!(image.first_match(&InputEvent::key_down(97, Some('a'))).is_none());
    }

    #[test]
    fn rule_without_policy_is_malformed() {
        let doc = "apiVersion: 0\nsound:\n  - check: []\n";
        match load_from_str(doc, None) {
            Err(Error::MalformedRule {
                channel: Channel::Sound,
                index: 0,
                ..
            }) => {}
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn unknown_policy_is_malformed() {
        let doc = "apiVersion: 0\nimage:\n  - policy: fancy\n";
        assert!(matches!(
            load_from_str(doc, None),
            Err(Error::MalformedRule {
                channel: Channel::Image,
                index: 0,
                ..
            })
        ));
    }

    #[test]
    fn font_policy_is_rejected_on_the_sound_channel() {
        let doc = "apiVersion: 0\nsound:\n  - policy: font\n";
        assert!(matches!(
            load_from_str(doc, None),
            Err(Error::MalformedRule { .. })
        ));
        // It stays valid on the image channel.
        let doc = "apiVersion: 0\nimage:\n  - policy: font\n";
        assert!(load_from_str(doc, None).is_ok());
    }

    #[test]
    fn named_file_argument_arity_is_checked() {
        let none = "apiVersion: 0\nsound:\n  - policy: named_file\n";
        let two = "apiVersion: 0\nsound:\n  - policy: named_file\n    args: [\"a.ogg\", \"b.ogg\"]\n";
        let non_string = "apiVersion: 0\nsound:\n  - policy: named_file\n    args: [3]\n";
        for doc in [none, two, non_string] {
            assert!(matches!(
                load_from_str(doc, None),
                Err(Error::MalformedRule { .. })
            ));
        }
    }

    #[test]
    fn no_arg_policies_reject_arguments() {
        let doc = "apiVersion: 0\nsound:\n  - policy: random\n    args: [\"x\"]\n";
        assert!(matches!(
            load_from_str(doc, None),
            Err(Error::MalformedRule { .. })
        ));
    }

    #[test]
    fn unrecognized_condition_key_is_malformed() {
        let doc = "apiVersion: 0\nsound:\n  - check:\n      - keycode: 97\n    policy: random\n";
        match load_from_str(doc, None) {
            Err(Error::MalformedRule { message, .. }) => {
                assert!(message.contains("keycode"), "{}", message);
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn non_boolean_class_flag_is_malformed() {
        let doc =
            "apiVersion: 0\nimage:\n  - check:\n      - unicode:\n          isalpha: yes please\n    policy: font\n";
        assert!(matches!(
            load_from_str(doc, None),
            Err(Error::MalformedRule { .. })
        ));
    }

    #[test]
    fn multi_character_value_is_malformed() {
        let doc =
            "apiVersion: 0\nsound:\n  - check:\n      - unicode:\n          value: \"ab\"\n    policy: random\n";
        assert!(matches!(
            load_from_str(doc, None),
            Err(Error::MalformedRule { .. })
        ));
    }

    #[test]
    fn type_condition_matches_event_kind() {
        let doc = "apiVersion: 0\nsound:\n  - check:\n      - type: JOYBUTTONDOWN\n    policy: deterministic\n  - policy: random\n";
        let map = load_from_str(doc, None).unwrap();
        let sound = map.sound.unwrap();

        let joy = InputEvent::joy_button_down(3);
        assert_eq!(joy.kind, EventKind::JoyButtonDown);
        assert_eq!(
            sound.first_match(&joy).unwrap().policy,
            PolicyKind::Deterministic
        );

        let key = InputEvent::key_down(97, Some('a'));
        assert_eq!(sound.first_match(&key).unwrap().policy, PolicyKind::Random);
    }

    #[test]
    fn unknown_event_type_is_malformed() {
        let doc = "apiVersion: 0\nsound:\n  - check:\n      - type: KEYUP\n    policy: random\n";
        assert!(matches!(
            load_from_str(doc, None),
            Err(Error::MalformedRule { .. })
        ));
    }

    #[test]
    fn unparseable_yaml_reports_location() {
        let doc = "apiVersion: 0\nsound: [\n";
        match load_from_str(doc, None) {
            Err(e @ Error::Parse { .. }) => {
                assert!(e.pretty().contains("parse error"));
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn load_from_path_round_trips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BASIC.as_bytes()).unwrap();
        let map = load_from_path(file.path()).unwrap();
        assert_eq!(map.sound.unwrap().len(), 2);

        let missing = file.path().with_extension("nope");
        match load_from_path(&missing) {
            Err(Error::Read { path, .. }) => assert_eq!(path, missing),
            other => panic!("{:?}", other),
        }
    }
}
