//! End-to-end navigation tests for the tree engine.
mod common;
use common::*;
use utree::prelude::*;

#[cfg(test)]
mod engine_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn history_of(engine: &TreeEngine) -> Vec<String> {
        engine.history().iter().map(str::to_string).collect()
    }

    #[test]
    fn test_load_text_field_start_node() {
        let bundle = Bundle::with_nodes(
            "textField~Hello",
            r#"
  <task-node name="textField~Hello">
    <transition to="end"/>
  </task-node>
  <end-state name="end"/>
"#,
        );
        let engine = bundle.engine();

        assert_eq!(engine.title(), "Sample Tree");
        assert_eq!(
            engine.current_node(),
            &Node::TextField(TextInput::new("Hello"))
        );
        assert!(!engine.should_block_advance());
        assert_eq!(history_of(&engine), vec!["textField~Hello".to_string()]);
        assert!(!engine.is_current_end_state());
        assert!(engine.is_next_end_state());
        assert!(engine.is_next_node_available());
        assert!(!engine.is_previous_node_available());
    }

    #[test]
    fn test_radio_buttons_block_until_selected() {
        let bundle = Bundle::with_nodes(
            "radioButtons~Pick",
            r#"
  <task-node name="radioButtons~Pick">
    <task name="A"/>
    <task name="B"/>
    <transition name="A" to="end1"/>
    <transition name="B" to="end2"/>
  </task-node>
  <end-state name="end1"/>
  <end-state name="end2"/>
"#,
        );
        let mut engine = bundle.engine();

        assert!(engine.should_block_advance());
        assert_eq!(
            engine.advance(),
            Advance::Blocked(BlockReason::SelectionRequired)
        );
        assert_eq!(engine.history().len(), 1);

        assert!(engine.current_node_mut().select(0));
        assert!(!engine.should_block_advance());
        assert_eq!(engine.advance(), Advance::Moved);

        assert_eq!(engine.current_node_name(), Some("end1"));
        assert!(engine.current_node().is_end_state());
        assert!(engine.is_current_end_state());
        assert!(engine.transitions().is_empty());
    }

    #[test]
    fn test_checklist_never_blocks() {
        let bundle = Bundle::with_nodes(
            "checkList~1~Tick one",
            r#"
  <task-node name="checkList~1~Tick one">
    <task name="A"/>
    <transition name="Yes" to="end"/>
  </task-node>
  <end-state name="end"/>
"#,
        );
        let mut engine = bundle.engine();

        assert!(!engine.should_block_advance());
        // "No" has no row.
        assert_eq!(engine.current_transition_key(), TransitionKey::No);
        assert_eq!(engine.advance(), Advance::Blocked(BlockReason::NoTransition));

        engine.current_node_mut().toggle(0);
        assert_eq!(engine.advance(), Advance::Moved);
        assert_eq!(engine.current_node_name(), Some("end"));
    }

    #[test]
    fn test_text_answer_scenario() {
        let bundle = Bundle::with_nodes(
            "textFieldWithAnswer~Q~Answer=42",
            r#"
  <task-node name="textFieldWithAnswer~Q~Answer=42">
    <transition name="Yes" to="textDisplay~Correct"/>
    <transition name="No" to="textDisplay~Wrong"/>
  </task-node>
  <task-node name="textDisplay~Correct"/>
  <task-node name="textDisplay~Wrong"/>
"#,
        );
        let mut engine = bundle.engine();
        assert_eq!(engine.current_node().text(), Some("Q"));

        engine.current_node_mut().set_text_input("42");
        assert_eq!(engine.current_transition_key(), TransitionKey::Yes);
        engine.current_node_mut().set_text_input("7");
        assert_eq!(engine.current_transition_key(), TransitionKey::No);

        assert!(engine.advance().is_moved());
        assert_eq!(engine.current_node().text(), Some("Wrong"));
        // The target exists but has no way out.
        assert!(engine.is_next_end_state());
        assert!(!engine.is_next_node_available());
        assert_eq!(engine.advance(), Advance::Blocked(BlockReason::NoTransition));
    }

    #[test]
    fn test_retreat_undoes_advance() {
        let bundle = branching_tree();
        let mut engine = bundle.engine();

        assert_eq!(engine.retreat(), Retreat::AtStart);
        assert_eq!(engine.advance(), Advance::Moved);
        let before = engine.current_node_name().map(str::to_string);

        engine.current_node_mut().select(1);
        assert_eq!(engine.advance(), Advance::Moved);
        assert_eq!(engine.current_node_name(), Some("textDisplay~Second"));
        assert!(engine.is_previous_node_available());

        assert_eq!(engine.retreat(), Retreat::Moved);
        assert_eq!(engine.current_node_name().map(str::to_string), before);
        // Rebuilt from its name, so the old selection is gone.
        assert!(!engine.current_node().has_selection());

        assert_eq!(engine.retreat(), Retreat::Moved);
        assert_eq!(engine.current_node_name(), Some("textDisplay~Welcome"));
        assert_eq!(engine.retreat(), Retreat::AtStart);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_answers_follow_navigation() {
        let bundle = branching_tree();
        let mut engine = bundle.engine();

        engine.advance();
        engine.current_node_mut().select(1);
        engine.advance();

        assert_eq!(
            engine.answers(),
            &[
                NodeState {
                    node_name: "textDisplay~Welcome".to_string(),
                    transition_key: TransitionKey::Any,
                    text_input: None,
                    selected_indices: vec![],
                },
                NodeState {
                    node_name: "radioButtons~Pick one".to_string(),
                    transition_key: TransitionKey::Label("B".to_string()),
                    text_input: None,
                    selected_indices: vec![1],
                },
            ]
        );

        engine.retreat();
        assert_eq!(engine.answers().len(), 1);
    }

    #[test]
    fn test_set_language_keeps_history() {
        let bundle = branching_tree()
            .with_translation("Filipino", &[("Pick one", "Pumili ng isa"), ("A", "Una")])
            .with_hints("Filipino", &[("Isa", "One")]);
        let mut engine = bundle.engine();
        engine.advance();
        engine.current_node_mut().select(0);

        let history = history_of(&engine);
        assert_eq!(
            engine.available_languages(),
            &["English".to_string(), "Filipino".to_string()]
        );

        assert!(engine.set_language("Filipino"));
        assert_eq!(history_of(&engine), history);
        assert_eq!(engine.current_language(), "Filipino");
        assert_eq!(engine.current_language_code(), "es-ES");
        assert_eq!(engine.current_node().text(), Some("Pumili ng isa"));
        assert_eq!(
            engine.current_node().options(),
            &["Una".to_string(), "B".to_string()]
        );
        assert_eq!(engine.hints().hint_for("isa"), Some("One"));
        // Re-derived, so the selection is reset.
        assert!(!engine.current_node().has_selection());

        assert!(engine.set_language("English"));
        assert_eq!(history_of(&engine), history);
        assert_eq!(engine.current_node().text(), Some("Pick one"));
    }

    #[test]
    fn test_translated_radio_buttons_route_by_source_label() {
        let bundle = branching_tree().with_translation("Filipino", &[("A", "Una")]);
        let mut engine = bundle.engine();
        engine.advance();

        assert!(engine.set_language("Filipino"));
        assert!(engine.current_node_mut().select(0));
        assert_eq!(engine.advance(), Advance::Moved);
        assert_eq!(engine.current_node_name(), Some("end1"));
        assert!(engine.is_current_end_state());
    }

    #[test]
    fn test_translated_link_routes_by_source_label() {
        let bundle = Bundle::with_nodes(
            "link~Continue?",
            r#"
  <task-node name="link~Continue?">
    <task name="Yes"/>
    <transition name="Yes" to="end~x"/>
  </task-node>
  <end-state name="end"/>
"#,
        )
        .with_translation("Filipino", &[("Yes", "Oo")]);
        let mut engine = bundle.engine();

        assert!(engine.set_language("Filipino"));
        assert_eq!(engine.current_node().options(), &["Oo".to_string()]);
        assert!(engine.current_node_mut().select(0));
        assert_eq!(engine.advance(), Advance::Moved);
        assert_eq!(engine.current_node_name(), Some("end"));
    }

    #[test]
    fn test_set_language_rejects_unknown_language() {
        let bundle = branching_tree();
        let mut engine = bundle.engine();

        assert!(!engine.set_language("Klingon"));
        assert_eq!(engine.current_language(), "English");
    }

    #[test]
    fn test_missing_catalog_entry_falls_back() {
        let bundle = Bundle::with_nodes(
            "textDisplay~Untranslated text",
            r#"<task-node name="textDisplay~Untranslated text"/>"#,
        )
        .with_translation("Czech", &[("Something else", "Něco jiného")]);
        let mut engine = bundle.engine();

        assert!(engine.set_language("Czech"));
        assert_eq!(engine.current_node().text(), Some("Untranslated text"));
    }

    #[test]
    fn test_no_start_transition() {
        let bundle = Bundle::new(
            "No Start",
            r#"<process-definition lang="English"><end-state name="end"/></process-definition>"#,
        );
        let mut engine = bundle.engine();

        assert!(engine.history().is_empty());
        assert_eq!(engine.current_node(), &Node::placeholder());
        assert!(engine.is_current_end_state());
        assert!(engine.is_next_end_state());
        assert_eq!(engine.advance(), Advance::Blocked(BlockReason::NoTransition));
        assert_eq!(engine.retreat(), Retreat::AtStart);
    }

    #[test]
    fn test_unreadable_bundle_degrades() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let engine = TreeEngine::load(dir.path().join("missing"));

        assert!(engine.history().is_empty());
        assert_eq!(engine.current_node(), &Node::placeholder());
        assert_eq!(engine.available_languages(), &["English".to_string()]);

        let result = TreeEngine::try_load(dir.path().join("missing"), EngineConfig::default());
        assert!(matches!(
            result,
            Err(DocumentError::MissingProcessDefinition(_))
        ));
    }

    #[test]
    fn test_malformed_process_definition() {
        let bundle = Bundle::new("Broken", "<process-definition><task-node></process-definition>");

        let engine = bundle.engine();
        assert!(engine.history().is_empty());

        let result = TreeEngine::try_load(&bundle.root, EngineConfig::default());
        assert!(matches!(result, Err(DocumentError::Xml { .. })));
    }

    #[test]
    fn test_start_name_missing_from_document() {
        let bundle = Bundle::with_nodes("textDisplay~Ghost", "");
        let engine = bundle.engine();

        assert_eq!(history_of(&engine), vec!["textDisplay~Ghost".to_string()]);
        assert_eq!(engine.current_node(), &Node::placeholder());
        assert!(engine.is_current_end_state());
    }

    #[test]
    fn test_base_language_and_discovery() {
        let bundle = Bundle::new(
            "Quiz",
            &process_definition("Filipino", "textDisplay~Kumusta", r#"<task-node name="textDisplay~Kumusta"/>"#),
        )
        .with_translation("English", &[("Kumusta", "Hello")])
        .with_translation("Bisaya", &[]);
        let engine = bundle.engine();

        assert_eq!(engine.base_language(), "Filipino");
        assert_eq!(engine.current_language(), "Filipino");
        assert_eq!(
            engine.available_languages(),
            &[
                "Bisaya".to_string(),
                "English".to_string(),
                "Filipino".to_string()
            ]
        );
        assert_eq!(engine.current_node().text(), Some("Kumusta"));
    }

    #[test]
    fn test_missing_lang_defaults_to_english() {
        let bundle = Bundle::new(
            "Plain",
            r#"<process-definition>
  <start-state><transition to="textDisplay~Hi"/></start-state>
  <task-node name="textDisplay~Hi"/>
</process-definition>"#,
        );
        let engine = bundle.engine();

        assert_eq!(engine.base_language(), "English");
        assert_eq!(engine.current_node().text(), Some("Hi"));
    }

    #[test]
    fn test_process_definition_falls_back_to_any_xml() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path().join("My Tree");
        std::fs::create_dir_all(&root).expect("Failed to create root");
        std::fs::write(
            root.join("other.xml"),
            process_definition("English", "textDisplay~Hi", r#"<task-node name="textDisplay~Hi"/>"#),
        )
        .expect("Failed to write process definition");

        let engine = TreeEngine::load(&root);
        assert_eq!(engine.title(), "My Tree");
        assert_eq!(engine.current_node().text(), Some("Hi"));
    }

    #[test]
    fn test_config_language_and_flags() {
        let bundle = branching_tree().with_translation("Filipino", &[("Welcome", "Maligayang pagdating")]);

        let engine = bundle.engine_with(EngineConfig::default().with_language("Filipino"));
        assert_eq!(engine.current_language(), "Filipino");
        assert_eq!(engine.current_node().text(), Some("Maligayang pagdating"));

        let engine = bundle.engine_with(EngineConfig::default().with_language("Klingon"));
        assert_eq!(engine.current_language(), "English");

        let config = EngineConfig::default()
            .with_voice_over(false)
            .with_autoplay(true);
        assert!(config.voice_over);
        assert!(bundle.engine_with(config).config().autoplay);
    }

    #[test]
    fn test_config_from_json() {
        let config = EngineConfig::from_json(r#"{ "autoplay": true, "voice_over": false }"#)
            .expect("Failed to parse config");
        assert_eq!(
            config,
            EngineConfig {
                voice_over: true,
                autoplay: true,
                language: None,
            }
        );

        let config = EngineConfig::from_json("{}").expect("Failed to parse config");
        assert_eq!(config, EngineConfig::default());

        assert!(matches!(
            EngineConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_config_from_file() {
        let bundle = branching_tree().with_file("config.json", r#"{ "language": "English" }"#);

        let config = EngineConfig::from_file(bundle.path("config.json")).expect("Failed to load config");
        assert_eq!(config.language.as_deref(), Some("English"));
        assert!(config.voice_over);

        assert!(matches!(
            EngineConfig::from_file(bundle.path("absent.json")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_engine_exposes_current_assets() {
        let bundle = Bundle::with_nodes(
            "textDisplay~@bgAudioName=rain~@audioName=intro~Hi",
            r#"
  <task-node name="textDisplay~@bgAudioName=rain~@audioName=intro~Hi">
    <transition to="textDisplay~@bg=night~Bye"/>
  </task-node>
  <task-node name="textDisplay~@bg=night~Bye"/>
"#,
        )
        .touch("res/bg.png")
        .touch("res/night.gif")
        .touch("audio/Rain.ogg")
        .touch("audio/English/intro.mp3");
        let mut engine = bundle.engine();

        assert_path_ends_with(engine.background_image(), "res/bg.png");
        assert_path_ends_with(engine.background_audio(), "audio/Rain.ogg");
        assert_path_ends_with(engine.voice_over_audio(), "audio/English/intro.mp3");

        engine.advance();
        assert_path_ends_with(engine.background_image(), "res/night.gif");
        assert_eq!(engine.background_audio(), None);
        assert_eq!(engine.voice_over_audio(), None);
    }

    #[test]
    fn test_decision_navigation() {
        let bundle = Bundle::with_nodes(
            "link~Ready?",
            r#"
  <decision name="link~Ready?">
    <transition name="Go" to="textDisplay~Going"/>
    <transition name="Wait" to="end"/>
  </decision>
  <task-node name="textDisplay~Going"/>
  <end-state name="end"/>
"#,
        );
        let mut engine = bundle.engine();

        assert_eq!(
            engine.current_node().options(),
            &["Go".to_string(), "Wait".to_string()]
        );
        assert!(engine.should_block_advance());

        engine.current_node_mut().select(0);
        assert!(!engine.is_next_end_state());
        assert_eq!(engine.advance(), Advance::Moved);
        assert_eq!(engine.current_node().text(), Some("Going"));
    }
}
