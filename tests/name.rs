//! Tests for the node-name decoder.
use utree::name::*;

#[cfg(test)]
mod name_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_text_display() {
        let info = NodeNameInfo::decode("textDisplay~Hello there");

        assert_eq!(info.type_tag, "textDisplay");
        assert_eq!(info.node_type, Some(TaskNodeType::TextDisplay));
        assert_eq!(info.text, "Hello there");
        assert_eq!(info.image_file_name, None);
        assert_eq!(info.unit, None);
        assert_eq!(info.modifiers, Modifiers::default());
        assert_eq!(info.components, vec!["Hello there".to_string()]);
    }

    #[test]
    fn test_decode_image_bearing_types() {
        let info = NodeNameInfo::decode("textImageDisplay~heart~Look at the heart");
        assert_eq!(info.node_type, Some(TaskNodeType::TextImageDisplay));
        assert_eq!(info.image_file_name.as_deref(), Some("heart"));
        assert_eq!(info.text, "Look at the heart");

        let info = NodeNameInfo::decode("imageDisplay~lungs");
        assert_eq!(info.image_file_name.as_deref(), Some("lungs"));
        assert_eq!(info.text, "lungs");
    }

    #[test]
    fn test_image_only_read_for_image_types() {
        let info = NodeNameInfo::decode("textField~kg~Weight");
        assert_eq!(info.image_file_name, None);
    }

    #[test]
    fn test_decode_unit() {
        let info = NodeNameInfo::decode("textFieldWithUnit~kg~How heavy are you?");
        assert_eq!(info.node_type, Some(TaskNodeType::TextFieldWithUnit));
        assert_eq!(info.unit.as_deref(), Some("kg"));
        assert_eq!(info.text, "How heavy are you?");

        // Two components: no unit.
        let info = NodeNameInfo::decode("textFieldWithUnit~How heavy are you?");
        assert_eq!(info.unit, None);
    }

    #[test]
    fn test_decode_modifiers_anywhere() {
        let info = NodeNameInfo::decode(
            "textDisplay~@bg=sky~@bgAudioName=Rain~Hello~@audioName=greeting",
        );

        assert_eq!(info.text, "Hello");
        assert_eq!(info.modifiers.background_image.as_deref(), Some("sky"));
        assert_eq!(info.modifiers.background_audio.as_deref(), Some("Rain"));
        assert_eq!(info.modifiers.voice_over_audio.as_deref(), Some("greeting"));
        assert_eq!(info.background_image_name(), "sky");
    }

    #[test]
    fn test_first_modifier_wins() {
        let info = NodeNameInfo::decode("textDisplay~@bg=first~@bg=second~Hi");
        assert_eq!(info.modifiers.background_image.as_deref(), Some("first"));
    }

    #[test]
    fn test_malformed_modifiers_are_ignored() {
        let info = NodeNameInfo::decode("textDisplay~@bg=~@unknown=1~@target=abc~Hi");

        assert_eq!(info.modifiers.background_image, None);
        assert_eq!(info.modifiers.target, None);
        assert_eq!(info.background_image_name(), DEFAULT_BACKGROUND_IMAGE);
        assert_eq!(info.text, "Hi");
    }

    #[test]
    fn test_checklist_target() {
        let info = NodeNameInfo::decode("checkList~@target=2~Pick two");
        assert_eq!(info.target_number_of_ticks(), 2);

        let info = NodeNameInfo::decode("checkList~3~Pick three");
        assert_eq!(info.target_number_of_ticks(), 3);

        let info = NodeNameInfo::decode("checkList~Pick any");
        assert_eq!(info.target_number_of_ticks(), 0);

        let info = NodeNameInfo::decode("checkList~many~Pick some");
        assert_eq!(info.target_number_of_ticks(), 0);
    }

    #[test]
    fn test_answer_component_is_glued_to_text() {
        let info = NodeNameInfo::decode("textFieldWithAnswer~Q~Answer=42");
        assert_eq!(info.text, "QAnswer=42");

        let info = NodeNameInfo::decode("textFieldWithAnswer~What is 6x7?Answer=42");
        assert_eq!(info.text, "What is 6x7?Answer=42");

        // Types without answers keep the plain last component.
        let info = NodeNameInfo::decode("textField~Q~Answer=42");
        assert_eq!(info.text, "Answer=42");
    }

    #[test]
    fn test_unknown_type_is_reported_as_none() {
        let info = NodeNameInfo::decode("hologram~Hello");
        assert_eq!(info.type_tag, "hologram");
        assert_eq!(info.node_type, None);
        assert_eq!(info.text, "Hello");
    }

    #[test]
    fn test_decoding_is_total() {
        let inputs = [
            "",
            "~",
            "~~~",
            "@",
            "@=",
            "textDisplay",
            "textDisplay~",
            "@bg=sky",
            "checkList~@target=~",
            "radioButtonsWithAnswer~Answer=",
            "imageDisplay~~",
        ];

        for input in inputs {
            let info = NodeNameInfo::decode(input);
            assert!(info.components.len() <= input.len());
        }

        let info = NodeNameInfo::decode("");
        assert_eq!(info.type_tag, "");
        assert_eq!(info.node_type, None);
        assert_eq!(info.text, "");
    }

    #[test]
    fn test_single_component_text_is_the_tag() {
        let info = NodeNameInfo::decode("textDisplay");
        assert_eq!(info.node_type, Some(TaskNodeType::TextDisplay));
        assert_eq!(info.text, "textDisplay");
        assert!(info.components.is_empty());

        assert_eq!(NodeNameInfo::decode("mystery").text, "mystery");
        assert_eq!(NodeNameInfo::decode("@bg=sky").text, "");
        assert_eq!(NodeNameInfo::decode("textDisplay~").text, "");
    }

    #[test]
    fn test_type_tags_round_trip() {
        for node_type in TaskNodeType::ALL {
            assert_eq!(TaskNodeType::from_tag(node_type.tag()), Some(*node_type));
        }
        assert_eq!(TaskNodeType::ALL.len(), 17);
        assert_eq!(TaskNodeType::from_tag("checkList"), Some(TaskNodeType::Checklist));
        assert_eq!(TaskNodeType::from_tag("checklist"), None);
        assert_eq!(
            TaskNodeType::from_tag("timestampDisplay"),
            Some(TaskNodeType::Timestamp)
        );
    }
}
